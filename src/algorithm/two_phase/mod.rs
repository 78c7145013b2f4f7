//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. A linear
//! program is solved with the two phase method on a dense tableau: the first phase finds a basic
//! feasible solution by driving artificial variables to zero, the second phase optimizes the
//! objective function starting from that solution.
use std::fmt::Display;
use std::marker::PhantomData;

use log::{debug, trace};
use num_traits::Float;

use crate::algorithm::error::SolveError;
use crate::algorithm::two_phase::strategy::pivot_rule::{PivotRule, SteepestDescentAlongVariable};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::constraint::{LinearConstraint, inverted_sum};
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::objective::LinearObjectiveFunction;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::float::numerical_precision::DEFAULT_EPSILON;

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;


/// Number of iterations after which a solve is aborted, unless configured otherwise.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Parameters of the solver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverConfig<F> {
    /// Tolerance used when comparing values, should be finite and non negative.
    pub epsilon: F,
    /// Maximal number of iterations, summed over both phases.
    pub max_iterations: usize,
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self {
            epsilon: num_traits::cast(DEFAULT_EPSILON).unwrap_or_else(F::epsilon),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Solves linear programs using the two phase Simplex method.
///
/// The solver holds its configuration and the number of iterations of the last solve, all other
/// state lives only for the duration of a call to `optimize`.
///
/// # Type parameters
///
/// * `F`: Floating point type of all values.
/// * `PR`: Rule that selects the column entering the basis in each iteration.
#[derive(Clone, Debug)]
pub struct SimplexSolver<F = f64, PR = SteepestDescentAlongVariable> {
    config: SolverConfig<F>,
    iterations: usize,
    pivot_rule: PhantomData<PR>,
}

impl<F: Float + Display> SimplexSolver<F> {
    /// Create a solver with the default configuration and pivot rule.
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    /// Create a solver with the default pivot rule.
    pub fn with_config(config: SolverConfig<F>) -> Self {
        Self::with_rule(config)
    }
}

impl<F: Float + Display> Default for SimplexSolver<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, PR> SimplexSolver<F, PR>
where
    F: Float + Display,
    PR: PivotRule<F>,
{
    /// Create a solver with the pivot rule of this type.
    pub fn with_rule(config: SolverConfig<F>) -> Self {
        Self {
            config,
            iterations: 0,
            pivot_rule: PhantomData,
        }
    }

    /// Solve a linear program.
    ///
    /// # Arguments
    ///
    /// * `objective`: Function to optimize, determines the number of decision variables.
    /// * `constraints`: Constraints with a coefficient for each decision variable. Constraints with
    /// a negative right hand side are normalized before solving.
    /// * `goal`: Whether to maximize or minimize.
    /// * `restrict_to_non_negative`: Whether all decision variables should be non negative.
    ///
    /// # Return value
    ///
    /// The optimal point and its objective function value, or the reason there is none.
    ///
    /// # Errors
    ///
    /// `MalformedInput` if the configuration or the problem can't be solved as given,
    /// `Infeasible` or `Unbounded` depending on the problem, `IterationLimitExceeded` if more than
    /// the configured number of iterations is needed.
    pub fn optimize(
        &mut self,
        objective: &LinearObjectiveFunction<F>,
        constraints: &[LinearConstraint<F>],
        goal: Objective,
        restrict_to_non_negative: bool,
    ) -> Result<Solution<F>, SolveError> {
        self.iterations = 0;
        self.validate(objective, constraints, restrict_to_non_negative)?;

        let constraints = constraints.iter()
            .cloned()
            .map(LinearConstraint::normalize)
            .collect::<Vec<_>>();
        let mut tableau = Tableau::new(
            objective,
            &constraints,
            goal,
            restrict_to_non_negative,
            self.config.epsilon,
        );
        if !tableau.has_finite_entries() {
            return Err(SolveError::MalformedInput(
                "the values are too large to represent the problem as a tableau".to_string(),
            ));
        }
        debug!(
            "Solving {:?} over {} variables with {} constraints, tableau of {} by {}",
            goal, objective.nr_variables(), constraints.len(), tableau.nr_rows(), tableau.nr_columns(),
        );

        let mut counter = IterationCounter::new(self.config.max_iterations);
        let result = solve::<F, PR>(&mut tableau, &mut counter);
        self.iterations = counter.count();
        result?;

        let solution = tableau.solution(objective);
        debug!("Optimum {} found after {} iterations", solution.value(), self.iterations);

        Ok(solution)
    }

    /// Check the configuration and whether the problem is well formed.
    fn validate(
        &self,
        objective: &LinearObjectiveFunction<F>,
        constraints: &[LinearConstraint<F>],
        restrict_to_non_negative: bool,
    ) -> Result<(), SolveError> {
        let epsilon = self.config.epsilon;
        if !epsilon.is_finite() || epsilon < F::zero() {
            return Err(SolveError::MalformedInput(format!(
                "epsilon should be finite and non negative, got {}", epsilon,
            )));
        }

        let nr_variables = objective.nr_variables();
        if nr_variables == 0 {
            return Err(SolveError::MalformedInput(
                "the objective function has no coefficients".to_string(),
            ));
        }
        let objective_finite = objective.coefficients().iter()
            .chain([objective.constant_term()].iter())
            .all(|value| value.is_finite());
        if !objective_finite {
            return Err(SolveError::MalformedInput(
                "the objective function contains a non finite value".to_string(),
            ));
        }

        for (i, constraint) in constraints.iter().enumerate() {
            if constraint.coefficients().len() != nr_variables {
                return Err(SolveError::MalformedInput(format!(
                    "constraint {} has {} coefficients, expected {}",
                    i, constraint.coefficients().len(), nr_variables,
                )));
            }
            let finite = constraint.coefficients().iter()
                .chain([constraint.value()].iter())
                .all(|value| value.is_finite());
            if !finite {
                return Err(SolveError::MalformedInput(format!(
                    "constraint {} contains a non finite value", i,
                )));
            }
            // The offset column holds the negated coefficient sum
            if !restrict_to_non_negative && !constraint.inverted_coefficient_sum().is_finite() {
                return Err(SolveError::MalformedInput(format!(
                    "the coefficients of constraint {} overflow when summed", i,
                )));
            }
        }
        if !restrict_to_non_negative && !inverted_sum(objective.coefficients()).is_finite() {
            return Err(SolveError::MalformedInput(
                "the objective coefficients overflow when summed".to_string(),
            ));
        }

        Ok(())
    }

    /// Tolerance used when comparing values.
    pub fn epsilon(&self) -> F {
        self.config.epsilon
    }

    /// Maximal number of iterations of a solve.
    pub fn max_iterations(&self) -> usize {
        self.config.max_iterations
    }

    /// Change the maximal number of iterations of subsequent solves.
    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.config.max_iterations = max_iterations;
    }

    /// Number of iterations counted during the last call to `optimize`.
    ///
    /// An iteration is counted before its pivot is determined, so an iteration that discovers
    /// unboundedness or exceeds the limit is included.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// Run both phases on a freshly built tableau.
fn solve<F, PR>(
    tableau: &mut Tableau<F>,
    counter: &mut IterationCounter,
) -> Result<(), SolveError>
where
    F: Float + Display,
    PR: PivotRule<F>,
{
    if tableau.nr_artificial_variables() > 0 {
        phase_one::primal::<_, PR>(tableau, counter)?;
        tableau.drop_phase_one_objective();
    }

    phase_two::primal::<_, PR>(tableau, counter)
}

/// Counts iterations over both phases and enforces the maximum.
#[derive(Debug)]
pub(crate) struct IterationCounter {
    count: usize,
    max_iterations: usize,
}

impl IterationCounter {
    pub(crate) fn new(max_iterations: usize) -> Self {
        Self { count: 0, max_iterations }
    }

    /// Count a new iteration.
    ///
    /// # Return value
    ///
    /// The number of this iteration, or an error if it is one too many.
    pub(crate) fn increment(&mut self) -> Result<usize, SolveError> {
        self.count += 1;
        if self.count > self.max_iterations {
            Err(SolveError::IterationLimitExceeded(self.count))
        } else {
            Ok(self.count)
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }
}

/// Perform primal pivots until the active objective row is optimal.
///
/// # Errors
///
/// `Unbounded` if a profitable column has no positive entry, `IterationLimitExceeded` if the
/// counter runs out.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    counter: &mut IterationCounter,
) -> Result<(), SolveError>
where
    F: Float + Display,
    PR: PivotRule<F>,
{
    let mut rule = PR::new(tableau);
    while let Some(column) = rule.select_primal_pivot_column(tableau) {
        let iteration = counter.increment()?;
        let row = tableau.select_primal_pivot_row(column).ok_or(SolveError::Unbounded)?;

        let labels = tableau.column_labels();
        trace!(
            "Iteration {}: {} enters in row {}, {} leaves",
            iteration, labels[column], row, labels[tableau.basic_column(row)],
        );
        tableau.bring_into_basis(column, row);
        trace!("{}", tableau);
    }
    debug_assert!(tableau.is_optimal());

    Ok(())
}
