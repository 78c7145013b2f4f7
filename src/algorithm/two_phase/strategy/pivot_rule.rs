//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use std::ops::Range;

use num_traits::Float;

use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::float::numerical_precision::is_negative;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made by the
/// tableau, independent of the strategy.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new(tableau: &Tableau<F>) -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Index of a column with a negative relative cost, or `None` if the tableau is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<usize>;
}

/// Simply pivot on the first column, which has a negative relative cost.
pub struct FirstProfitable;
impl<F: Float> PivotRule<F> for FirstProfitable {
    fn new(_tableau: &Tableau<F>) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        tableau.variable_columns()
            .find(|&column| is_negative(tableau.relative_cost(column), tableau.epsilon()))
    }
}

/// Small modification w.r.t. the `FirstProfitable` rule; it starts the search from the last
/// column selected.
pub struct FirstProfitableWithMemory {
    last_selected: Option<usize>,
}
impl<F: Float> PivotRule<F> for FirstProfitableWithMemory {
    fn new(_tableau: &Tableau<F>) -> Self {
        Self { last_selected: None }
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        let columns = tableau.variable_columns();
        let find = |mut to_consider: Range<usize>| to_consider
            .find(|&column| is_negative(tableau.relative_cost(column), tableau.epsilon()));

        // Columns can disappear between phases, so the memory might point past the end
        let potential = match self.last_selected {
            Some(last) if columns.contains(&last) => find((last + 1)..columns.end)
                .or_else(|| find(columns.start..(last + 1))),
            _ => find(columns),
        };

        self.last_selected = potential;
        potential
    }
}

/// Simply pivot on the column, which has the most negative relative cost.
///
/// Also known as Dantzig's rule. On ties, the column with the lowest index is selected.
pub struct SteepestDescentAlongVariable;
impl<F: Float> PivotRule<F> for SteepestDescentAlongVariable {
    fn new(_tableau: &Tableau<F>) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        let mut smallest = None;
        for (j, cost) in tableau.variable_columns()
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|&(_, cost)| is_negative(cost, tableau.epsilon())) {
            if let Some((existing_j, existing_cost)) = smallest.as_mut() {
                if cost < *existing_cost {
                    *existing_j = j;
                    *existing_cost = cost;
                }
            } else { smallest = Some((j, cost)) }
        }

        smallest.map(|(j, _)| j)
    }
}
