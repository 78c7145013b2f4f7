//! # Phase one
//!
//! Computing a basic feasible solution: the first phase of the two phase method.
use std::fmt::Display;

use log::debug;
use num_traits::Float;

use crate::algorithm::error::SolveError;
use crate::algorithm::two_phase::{IterationCounter, primal as iterate_until_optimal};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::float::numerical_precision::approx_equal;

/// Minimize the sum of the artificial variables.
///
/// While calling this method, the tableau should still have its artificial objective row. After
/// it returns successfully, the artificial objective is zero and the current basis is feasible for
/// the problem without artificial variables.
///
/// # Errors
///
/// `Infeasible` if the artificial variables can't all be brought to zero, or any error of the
/// pivoting loop.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    counter: &mut IterationCounter,
) -> Result<(), SolveError>
where
    F: Float + Display,
    PR: PivotRule<F>,
{
    debug_assert_eq!(tableau.nr_objective_rows(), 2);
    debug!("Phase one with {} artificial variables", tableau.nr_artificial_variables());

    iterate_until_optimal::<_, PR>(tableau, counter)?;

    let value = tableau.artificial_objective_value();
    if approx_equal(value, F::zero(), tableau.epsilon()) {
        debug!("Phase one done after {} iterations", counter.count());
        Ok(())
    } else {
        debug!("Phase one ended with artificial objective value {}, infeasible", value);
        Err(SolveError::Infeasible)
    }
}
