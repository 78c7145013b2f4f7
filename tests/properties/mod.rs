//! # Properties of solutions
//!
//! Randomly generated small problems, with box bounds added such that no problem is unbounded.
use proptest::prelude::*;

use dense_simplex::algorithm::SolveError;
use dense_simplex::algorithm::two_phase::SimplexSolver;
use dense_simplex::data::linear_program::constraint::LinearConstraint;
use dense_simplex::data::linear_program::elements::{ConstraintType, Objective};
use dense_simplex::data::linear_program::objective::LinearObjectiveFunction;

const BOUND: f64 = 10f64;
const TOLERANCE: f64 = 1e-6;

#[derive(Clone, Debug)]
struct Problem {
    objective: LinearObjectiveFunction<f64>,
    constraints: Vec<LinearConstraint<f64>>,
    goal: Objective,
    restrict_to_non_negative: bool,
}

impl Problem {
    /// Constraints including the box bounds on every variable.
    fn bounded_constraints(&self) -> Vec<LinearConstraint<f64>> {
        let nr_variables = self.objective.nr_variables();
        let unit = |i: usize| -> Vec<f64> {
            (0..nr_variables).map(|j| if i == j { 1f64 } else { 0f64 }).collect()
        };

        let mut constraints = self.constraints.clone();
        for i in 0..nr_variables {
            constraints.push(LinearConstraint::new(unit(i), ConstraintType::Less, BOUND));
            if !self.restrict_to_non_negative {
                constraints.push(LinearConstraint::new(unit(i), ConstraintType::Greater, -BOUND));
            }
        }

        constraints
    }
}

fn relation_strategy() -> impl Strategy<Value = ConstraintType> {
    prop_oneof![
        3 => Just(ConstraintType::Less),
        1 => Just(ConstraintType::Greater),
        1 => Just(ConstraintType::Equal),
    ]
}

fn constraint_strategy(nr_variables: usize) -> impl Strategy<Value = LinearConstraint<f64>> {
    (prop::collection::vec(-3i32..=3, nr_variables), relation_strategy(), -5i32..=8)
        .prop_map(|(coefficients, relation, value)| LinearConstraint::new(
            coefficients.into_iter().map(f64::from).collect(),
            relation,
            f64::from(value),
        ))
}

fn problem_strategy() -> impl Strategy<Value = Problem> {
    (1usize..=3)
        .prop_flat_map(|nr_variables| (
            prop::collection::vec(-3i32..=3, nr_variables),
            -2i32..=2,
            prop::collection::vec(constraint_strategy(nr_variables), 1..=4),
            any::<bool>(),
            any::<bool>(),
        ))
        .prop_map(|(coefficients, constant, constraints, maximize, restrict_to_non_negative)| Problem {
            objective: LinearObjectiveFunction::new(
                coefficients.into_iter().map(f64::from).collect(),
                f64::from(constant),
            ),
            constraints,
            goal: if maximize { Objective::Maximize } else { Objective::Minimize },
            restrict_to_non_negative,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// An optimum satisfies every constraint and reports its own objective value.
    #[test]
    fn optimum_is_feasible(problem in problem_strategy()) {
        let constraints = problem.bounded_constraints();
        let mut solver = SimplexSolver::new();
        let result = solver.optimize(
            &problem.objective,
            &constraints,
            problem.goal,
            problem.restrict_to_non_negative,
        );

        match result {
            Ok(solution) => {
                for constraint in &constraints {
                    prop_assert!(constraint.is_satisfied_by(solution.point(), TOLERANCE));
                }
                if problem.restrict_to_non_negative {
                    prop_assert!(solution.point().iter().all(|&x| x >= -TOLERANCE));
                }
                let value = problem.objective.value(solution.point());
                prop_assert!((solution.value() - value).abs() <= TOLERANCE);
            },
            Err(error) => {
                prop_assert_eq!(error, SolveError::Infeasible);
            },
        }
    }

    /// Keeping only the constraints the origin satisfies, an optimum exists and is at least as good
    /// as the origin.
    #[test]
    fn optimum_improves_on_origin(problem in problem_strategy()) {
        let origin = vec![0f64; problem.objective.nr_variables()];
        let mut constraints = problem.bounded_constraints();
        constraints.retain(|c| c.is_satisfied_by(&origin, 0f64));

        let mut solver = SimplexSolver::new();
        let result = solver.optimize(
            &problem.objective,
            &constraints,
            problem.goal,
            problem.restrict_to_non_negative,
        );
        prop_assert!(result.is_ok());

        if let Ok(solution) = result {
            let at_origin = problem.objective.constant_term();
            match problem.goal {
                Objective::Maximize => {
                    prop_assert!(solution.value() >= at_origin - TOLERANCE);
                },
                Objective::Minimize => {
                    prop_assert!(solution.value() <= at_origin + TOLERANCE);
                },
            }
        }
    }

    /// Normalizing a constraint twice changes nothing the second time.
    #[test]
    fn normalize_is_idempotent(constraint in constraint_strategy(3)) {
        let once = constraint.normalize();
        prop_assert!(once.value() >= 0f64);
        prop_assert_eq!(once.clone().normalize(), once);
    }
}
