//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau is stored densely. The objective rows are at the top: during the first phase, row 0
//! holds the artificial objective (`W`) and row 1 the objective of the problem (`Z`). After the first
//! phase, only the `Z` row remains at row 0. The objective rows are stored such that the tableau is
//! optimal exactly when no entry of row 0 is negative.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Range;

use enum_map::EnumMap;
use index_utils::remove_indices;
use itertools::{Itertools, repeat_n};
use log::debug;
use num_traits::Float;

use crate::algorithm::two_phase::tableau::label::ColumnLabel;
use crate::algorithm::two_phase::tableau::layout::{ColumnGroup, ColumnLayout};
use crate::data::linear_algebra::matrix::Dense;
use crate::data::linear_program::constraint::{LinearConstraint, inverted_sum};
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::objective::LinearObjectiveFunction;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::float::numerical_precision::{approx_equal, is_negative, is_positive};

pub mod label;
pub mod layout;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns the matrix, the labels of its columns and the current basis. The labels always have the
/// same length as the columns of the matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Objective rows followed by one row per constraint, the last column holds the right hand
    /// side.
    matrix: Dense<F>,
    /// The variable of each column of `matrix`.
    column_labels: Vec<ColumnLabel>,
    /// Maps each constraint row (counted without the objective rows) to the column that is basic
    /// in it.
    ///
    /// This attribute changes with a basis change.
    basis: Vec<usize>,

    epsilon: F,

    /// Includes the negative offset column, if there is one.
    nr_decision_variables: usize,
    nr_slack_variables: usize,
    nr_artificial_variables: usize,
    /// Either 2 (during the first phase) or 1.
    nr_objective_rows: usize,
    restrict_to_non_negative: bool,
}

impl<F: Float> Tableau<F> {
    /// Build the initial tableau.
    ///
    /// # Arguments
    ///
    /// * `objective`: Function to optimize, determines the number of decision variables.
    /// * `constraints`: Constraints with a non negative right hand side, each with as many
    /// coefficients as the objective function.
    /// * `goal`: Whether to maximize or minimize.
    /// * `restrict_to_non_negative`: If false, a shared offset column is added such that decision
    /// variables can take negative values.
    /// * `epsilon`: Tolerance for all comparisons.
    pub fn new(
        objective: &LinearObjectiveFunction<F>,
        constraints: &[LinearConstraint<F>],
        goal: Objective,
        restrict_to_non_negative: bool,
        epsilon: F,
    ) -> Self {
        debug_assert!(constraints.iter().all(|constraint| constraint.value() >= F::zero()));
        debug_assert!(constraints.iter().all(|constraint| {
            constraint.coefficients().len() == objective.nr_variables()
        }));

        let mut counts = EnumMap::<ConstraintType, usize>::default();
        for constraint in constraints {
            counts[constraint.relation()] += 1;
        }
        let nr_slack_variables = counts[ConstraintType::Less] + counts[ConstraintType::Greater];
        let nr_artificial_variables = counts[ConstraintType::Equal] + counts[ConstraintType::Greater];
        let nr_objective_rows = if nr_artificial_variables > 0 { 2 } else { 1 };

        let layout = ColumnLayout::new(
            nr_objective_rows,
            objective.nr_variables(),
            !restrict_to_non_negative,
            nr_slack_variables,
            nr_artificial_variables,
        );
        let rhs = layout.start(ColumnGroup::RightHandSide);
        let decision_start = layout.start(ColumnGroup::Decision);
        let offset_column = layout.start(ColumnGroup::NegativeOffset);

        let mut matrix = Dense::zeros(nr_objective_rows + constraints.len(), layout.width());

        // Objective rows
        if nr_objective_rows == 2 {
            matrix.set(0, 0, -F::one());
        }
        let z = nr_objective_rows - 1;
        let (z_coefficient, costs, constant) = match goal {
            Objective::Maximize => (
                F::one(),
                objective.coefficients().iter().map(|&c| -c).collect::<Vec<_>>(),
                objective.constant_term(),
            ),
            Objective::Minimize => (
                -F::one(),
                objective.coefficients().to_vec(),
                -objective.constant_term(),
            ),
        };
        matrix.set(z, z, z_coefficient);
        for (j, &cost) in costs.iter().enumerate() {
            matrix.set(z, decision_start + j, cost);
        }
        matrix.set(z, rhs, constant);
        if !restrict_to_non_negative {
            matrix.set(z, offset_column, inverted_sum(&costs));
        }

        // Constraint rows
        let mut basis = Vec::with_capacity(constraints.len());
        let mut nr_slacks_placed = 0;
        let mut nr_artificials_placed = 0;
        for (i, constraint) in constraints.iter().enumerate() {
            let row = nr_objective_rows + i;

            for (j, &coefficient) in constraint.coefficients().iter().enumerate() {
                matrix.set(row, decision_start + j, coefficient);
            }
            if !restrict_to_non_negative {
                matrix.set(row, offset_column, constraint.inverted_coefficient_sum());
            }
            matrix.set(row, rhs, constraint.value());

            let relation = constraint.relation();
            let slack_column = layout.start(ColumnGroup::Slack) + nr_slacks_placed;
            if let Some(coefficient) = relation.slack_coefficient() {
                matrix.set(row, slack_column, coefficient);
                nr_slacks_placed += 1;
            }

            let basic_column = if relation.needs_artificial() {
                let column = layout.start(ColumnGroup::Artificial) + nr_artificials_placed;
                matrix.set(0, column, F::one());
                matrix.set(row, column, F::one());
                // Express the artificial objective in the non artificial columns
                matrix.subtract_row(0, row, F::one());
                nr_artificials_placed += 1;
                column
            } else {
                slack_column
            };
            basis.push(basic_column);
        }
        debug_assert_eq!(nr_slacks_placed, nr_slack_variables);
        debug_assert_eq!(nr_artificials_placed, nr_artificial_variables);

        let tableau = Self {
            matrix,
            column_labels: layout.labels(),
            basis,
            epsilon,
            nr_decision_variables: layout.len(ColumnGroup::Decision)
                + layout.len(ColumnGroup::NegativeOffset),
            nr_slack_variables,
            nr_artificial_variables,
            nr_objective_rows,
            restrict_to_non_negative,
        };
        debug_assert!(is_in_basic_feasible_solution_state(&tableau));

        tableau
    }

    /// Divide a row by a value.
    pub fn divide_row(&mut self, row: usize, divisor: F) {
        self.matrix.divide_row(row, divisor);
    }

    /// Subtract `multiple` times row `subtrahend` from row `minuend`.
    pub fn subtract_row(&mut self, minuend: usize, subtrahend: usize, multiple: F) {
        self.matrix.subtract_row(minuend, subtrahend, multiple);
    }

    /// Whether no entry overflowed while building the tableau.
    pub fn has_finite_entries(&self) -> bool {
        (0..self.matrix.nr_rows()).all(|i| self.matrix.row(i).iter().all(|value| value.is_finite()))
    }

    /// Whether the active objective row allows no improvement.
    ///
    /// # Return value
    ///
    /// True if no entry of row 0 outside of the objective columns and the right hand side is
    /// negative beyond the tolerance.
    pub fn is_optimal(&self) -> bool {
        self.variable_columns()
            .all(|j| !is_negative(self.relative_cost(j), self.epsilon))
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row with the minimal ratio between the right hand side and the column, among the
    /// rows where the column is positive. When several rows attain the minimum ratio (within the
    /// tolerance), a row in which an artificial variable is basic is preferred, such that the
    /// artificial variable leaves the basis. Otherwise, the first of those rows is taken.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the column entering the basis.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.rhs_offset());

        let rhs = self.rhs_offset();
        // (minimum ratio, rows attaining it)
        let mut minimum: Option<(F, Vec<usize>)> = None;
        for row in self.constraint_rows() {
            let entry = self.entry(row, column);
            if is_positive(entry, self.epsilon) {
                let ratio = self.entry(row, rhs) / entry;
                if let Some((min_ratio, min_rows)) = &mut minimum {
                    if approx_equal(ratio, *min_ratio, self.epsilon) {
                        min_rows.push(row);
                    } else if ratio < *min_ratio {
                        *min_ratio = ratio;
                        *min_rows = vec![row];
                    }
                } else {
                    minimum = Some((ratio, vec![row]));
                }
            }
        }

        let (_, rows) = minimum?;
        if self.nr_artificial_variables > 0 && rows.len() > 1 {
            let artificial_basic = rows.iter()
                .find(|&&row| self.column_labels[self.basic_column(row)].is_artificial());
            if let Some(&row) = artificial_basic {
                return Some(row);
            }
        }

        rows.first().copied()
    }

    /// Pivot: make `column` the basic column of `row`.
    ///
    /// The row gets divided by the pivot value, after which the column is eliminated from all
    /// other rows.
    pub fn bring_into_basis(&mut self, column: usize, row: usize) {
        debug_assert!(column < self.rhs_offset());
        debug_assert!(row >= self.nr_objective_rows && row < self.nr_rows());
        debug_assert!(!approx_equal(self.entry(row, column), F::zero(), self.epsilon));

        self.divide_row(row, self.entry(row, column));
        for i in 0..self.nr_rows() {
            if i != row {
                let multiple = self.entry(i, column);
                if multiple != F::zero() {
                    self.subtract_row(i, row, multiple);
                }
            }
        }
        self.basis[row - self.nr_objective_rows] = column;

        debug_assert!(self.is_unit_column(column, row));
    }

    /// Remove the artificial objective and columns that are not needed in the second phase.
    ///
    /// Removed are the first objective row and its column, every column with a positive cost in
    /// the artificial objective (those variables need to stay zero) and every artificial column
    /// that is not in the basis. Artificial columns that are still basic are kept; they are at
    /// zero level and can't become positive anymore.
    ///
    /// Does nothing when there is no artificial objective.
    pub fn drop_phase_one_objective(&mut self) {
        if self.nr_objective_rows == 1 {
            return;
        }

        let positive_cost = self.variable_columns()
            .filter(|&j| is_positive(self.entry(0, j), self.epsilon));
        let non_basic_artificial = self.variable_columns()
            .filter(|&j| self.column_labels[j].is_artificial() && self.basic_row(j).is_none());
        let columns = [0].into_iter()
            .chain(positive_cost)
            .chain(non_basic_artificial)
            .sorted_unstable()
            .dedup()
            .collect::<Vec<_>>();
        debug_assert!(self.basis.iter().all(|j| columns.binary_search(j).is_err()));
        debug!(
            "Dropping {} columns after phase one: {}",
            columns.len(),
            columns.iter().map(|&j| self.column_labels[j]).join(", "),
        );

        self.matrix = self.matrix.without(&[0], &columns);
        remove_indices(&mut self.column_labels, &columns);
        for column in &mut self.basis {
            let shift = columns.partition_point(|&removed| removed < *column);
            *column -= shift;
        }
        self.nr_objective_rows = 1;
        self.nr_artificial_variables = 0;

        debug_assert_eq!(self.column_labels.len(), self.matrix.nr_columns());
        debug_assert!(is_in_basic_feasible_solution_state(self));
    }

    /// Read the current basic feasible solution.
    ///
    /// Decision variables that are not basic (or whose column was removed) have value zero. When
    /// the variables are not restricted to be non negative, the value of the shared offset column
    /// gets subtracted from each of them.
    ///
    /// # Arguments
    ///
    /// * `objective`: The function that was optimized, used to compute the objective value.
    pub fn solution(&self, objective: &LinearObjectiveFunction<F>) -> Solution<F> {
        let offset = if self.restrict_to_non_negative {
            F::zero()
        } else {
            self.column_value(ColumnLabel::NegativeOffset)
        };

        let point = (0..objective.nr_variables())
            .map(|i| self.column_value(ColumnLabel::Decision(i)) - offset)
            .collect::<Vec<_>>();
        let value = objective.value(&point);

        Solution::new(point, value)
    }

    /// Value of the variable with the given label in the current basic solution.
    fn column_value(&self, label: ColumnLabel) -> F {
        self.column_index(label)
            .and_then(|j| self.basic_row(j))
            .map_or(F::zero(), |row| self.entry(row, self.rhs_offset()))
    }

    /// The row in which a column is basic, if it is basic.
    pub fn basic_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        self.basis.iter()
            .position(|&j| j == column)
            .map(|i| i + self.nr_objective_rows)
    }

    /// The column that is basic in a constraint row.
    pub fn basic_column(&self, row: usize) -> usize {
        debug_assert!(row >= self.nr_objective_rows && row < self.nr_rows());

        self.basis[row - self.nr_objective_rows]
    }

    /// Whether a column equals the unit vector of a row.
    fn is_unit_column(&self, column: usize, row: usize) -> bool {
        self.matrix.column(column)
            .enumerate()
            .all(|(i, value)| {
                let expected = if i == row { F::one() } else { F::zero() };
                approx_equal(value, expected, self.epsilon)
            })
    }

    /// Index of the column with a label, if it exists.
    pub fn column_index(&self, label: ColumnLabel) -> Option<usize> {
        self.column_labels.iter().position(|&other| other == label)
    }

    /// Columns of variables, that is, all columns but the objective columns and the right hand side.
    pub fn variable_columns(&self) -> Range<usize> {
        self.nr_objective_rows..self.rhs_offset()
    }

    /// Rows that describe constraints, that is, all rows below the objective rows.
    fn constraint_rows(&self) -> Range<usize> {
        self.nr_objective_rows..self.nr_rows()
    }

    /// Value of the artificial objective of the first phase.
    ///
    /// The problem is feasible only when this value is zero at the end of the first phase.
    pub fn artificial_objective_value(&self) -> F {
        debug_assert_eq!(self.nr_objective_rows, 2);

        self.entry(0, self.rhs_offset())
    }

    /// Entry of a column in the active objective row.
    ///
    /// A negative relative cost means that bringing the column into the basis improves the
    /// objective.
    pub fn relative_cost(&self, column: usize) -> F {
        debug_assert!(column < self.rhs_offset());

        self.entry(0, column)
    }

    #[cfg(test)]
    pub(crate) fn matrix(&self) -> &Dense<F> {
        &self.matrix
    }

    /// Single element of the matrix.
    pub fn entry(&self, row: usize, column: usize) -> F {
        self.matrix.get(row, column)
    }

    /// Labels of all columns, in order.
    pub fn column_labels(&self) -> &[ColumnLabel] {
        &self.column_labels
    }

    /// Index of the right hand side column.
    pub fn rhs_offset(&self) -> usize {
        self.nr_columns() - 1
    }

    /// Number of rows, including the objective rows.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows()
    }

    /// Number of columns, including the objective columns and the right hand side.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns()
    }

    /// Either 2 (with an artificial objective) or 1.
    pub fn nr_objective_rows(&self) -> usize {
        self.nr_objective_rows
    }

    /// Number of decision variables, including the shared negative offset variable.
    pub fn nr_decision_variables(&self) -> usize {
        self.nr_decision_variables
    }

    /// Number of slack variables.
    pub fn nr_slack_variables(&self) -> usize {
        self.nr_slack_variables
    }

    /// Number of artificial variables, zero after the first phase.
    pub fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial_variables
    }

    /// Tolerance used for all comparisons.
    pub fn epsilon(&self) -> F {
        self.epsilon
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
fn is_in_basic_feasible_solution_state<F: Float>(tableau: &Tableau<F>) -> bool {
    let sizes = tableau.column_labels.len() == tableau.nr_columns()
        && tableau.basis.len() + tableau.nr_objective_rows == tableau.nr_rows();
    let unique = tableau.basis.iter().all_unique();
    let basis = tableau.basis.iter()
        .enumerate()
        .all(|(i, &j)| tableau.is_unit_column(j, i + tableau.nr_objective_rows));
    // Tolerance is relative, the values may have grown large
    let rhs = tableau.rhs_offset();
    let b = tableau.constraint_rows()
        .all(|i| {
            let value = tableau.entry(i, rhs);
            let scale = F::one().max(value.abs());
            !is_negative(value / scale, tableau.epsilon)
        });

    sizes && unique && basis && b
}

impl<F: Float + Display> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Tableau:")?;
        let column_width = 10;
        let counter_width = 8;

        // Column labels
        write!(f, "{0:width$}", "", width = counter_width)?;
        for label in &self.column_labels {
            write!(f, "{0:^width$}", label.to_string(), width = column_width)?;
        }
        writeln!(f)?;

        // Separator
        writeln!(f, "{}", repeat_n("-", counter_width + self.nr_columns() * column_width)
            .collect::<String>())?;

        // Row counter and row data
        for row in 0..self.nr_rows() {
            let name = if row < self.nr_objective_rows {
                self.column_labels[row].to_string()
            } else {
                self.column_labels[self.basic_column(row)].to_string()
            };
            write!(f, "{:>width$}", format!("{}  |", name), width = counter_width)?;
            for column in 0..self.nr_columns() {
                let number = format!("{:.4}", self.entry(row, column));
                write!(f, "{:^width$}", number, width = column_width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
