//! # Dense matrices
//!
//! A row major matrix with the elementary row operations needed for Gauss-Jordan elimination.
use std::cmp::Ordering;

use index_utils::remove_indices;
use itertools::repeat_n;
use num_traits::Float;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
///
/// Changing the dimensions is only possible by creating a copy, see `Dense::without`.
#[derive(Clone, Debug, PartialEq)]
pub struct Dense<F> {
    data: Vec<Vec<F>>,
    nr_columns: usize,
}

impl<F: Float> Dense<F> {
    /// Create a matrix filled with zeros.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: repeat_n(repeat_n(F::zero(), nr_columns).collect::<Vec<_>>(), nr_rows).collect(),
            nr_columns,
        }
    }

    /// Create a `Dense` matrix from the provided rows.
    ///
    /// All rows should have the same length.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let nr_columns = data.first().map_or(0, Vec::len);
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { data, nr_columns }
    }

    /// Get the value at row `i` and column `j`.
    pub fn get(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at row `i` and column `j`.
    pub fn set(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i`.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows());

        &self.data[i]
    }

    /// Get all values in column `j`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = F> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| row[j])
    }

    /// Divide all values in row `i` by `divisor`.
    pub fn divide_row(&mut self, i: usize, divisor: F) {
        debug_assert!(i < self.nr_rows());
        debug_assert!(divisor != F::zero());

        for value in &mut self.data[i] {
            *value = *value / divisor;
        }
    }

    /// Subtract a multiple of row `subtrahend` from row `minuend`.
    ///
    /// # Arguments
    ///
    /// * `minuend`: Row that gets changed.
    /// * `subtrahend`: Row that is read, should differ from `minuend`.
    /// * `multiple`: Factor to multiply the `subtrahend` row with before subtracting.
    pub fn subtract_row(&mut self, minuend: usize, subtrahend: usize, multiple: F) {
        debug_assert!(minuend < self.nr_rows());
        debug_assert!(subtrahend < self.nr_rows());

        let (write, read) = match minuend.cmp(&subtrahend) {
            Ordering::Less => {
                let (head, tail) = self.data.split_at_mut(subtrahend);
                (&mut head[minuend], &tail[0])
            },
            Ordering::Greater => {
                let (head, tail) = self.data.split_at_mut(minuend);
                (&mut tail[0], &head[subtrahend])
            },
            Ordering::Equal => panic!("Can't subtract row {} from itself", minuend),
        };

        for (value, &read_value) in write.iter_mut().zip(read.iter()) {
            *value = *value - multiple * read_value;
        }
    }

    /// Copy this matrix, leaving out some rows and columns.
    ///
    /// # Arguments
    ///
    /// * `rows`: Indices of rows to leave out, sorted and without duplicates.
    /// * `columns`: Indices of columns to leave out, sorted and without duplicates.
    ///
    /// # Return value
    ///
    /// A new matrix of size `(nr_rows - rows.len()) x (nr_columns - columns.len())`.
    #[must_use]
    pub fn without(&self, rows: &[usize], columns: &[usize]) -> Self {
        debug_assert!(rows.windows(2).all(|pair| pair[0] < pair[1]));
        debug_assert!(columns.windows(2).all(|pair| pair[0] < pair[1]));
        debug_assert!(rows.iter().all(|&i| i < self.nr_rows()));
        debug_assert!(columns.iter().all(|&j| j < self.nr_columns));

        let data = self.data.iter()
            .enumerate()
            .filter(|(i, _)| rows.binary_search(i).is_err())
            .map(|(_, row)| {
                let mut row = row.clone();
                remove_indices(&mut row, columns);
                row
            })
            .collect();

        Self { data, nr_columns: self.nr_columns - columns.len() }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.data.len()
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}
