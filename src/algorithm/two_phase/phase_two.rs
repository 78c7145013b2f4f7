//! # Phase two
//!
//! Optimizing the objective function, starting from a basic feasible solution.
use std::fmt::Display;

use log::debug;
use num_traits::Float;

use crate::algorithm::error::SolveError;
use crate::algorithm::two_phase::{IterationCounter, primal as iterate_until_optimal};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be non negative (primal feasibility)
/// - The artificial objective row should have been removed
///
/// # Errors
///
/// `Unbounded` if the objective can be improved without limit, or `IterationLimitExceeded`. The
/// problem can't be infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    counter: &mut IterationCounter,
) -> Result<(), SolveError>
where
    F: Float + Display,
    PR: PivotRule<F>,
{
    debug_assert_eq!(tableau.nr_objective_rows(), 1);
    debug_assert_eq!(tableau.nr_artificial_variables(), 0);
    debug!("Phase two on a tableau of {} by {}", tableau.nr_rows(), tableau.nr_columns());

    let result = iterate_until_optimal::<_, PR>(tableau, counter);
    if result.is_ok() {
        debug!("Phase two done, {} iterations in total", counter.count());
    }

    result
}
