//! # Known problems
//!
//! Small linear programs with an optimum that can be verified by hand.
use approx::assert_abs_diff_eq;

use dense_simplex::algorithm::SolveError;
use dense_simplex::algorithm::two_phase::{SimplexSolver, SolverConfig};
use dense_simplex::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use dense_simplex::data::linear_program::constraint::LinearConstraint;
use dense_simplex::data::linear_program::elements::{ConstraintType, Objective};
use dense_simplex::data::linear_program::objective::LinearObjectiveFunction;

/// Two suppliers with 20 and 30 units, three customers demanding 10, 25 and 15 units.
///
/// Variables are ordered by supplier, then by customer.
fn transportation() -> (LinearObjectiveFunction<f64>, Vec<LinearConstraint<f64>>) {
    let objective = LinearObjectiveFunction::new(
        vec![8f64, 6f64, 10f64, 9f64, 12f64, 13f64],
        0f64,
    );
    let supply = [20f64, 30f64].iter().enumerate()
        .map(|(i, &amount)| {
            let coefficients = (0..6).map(|j| if j / 3 == i { 1f64 } else { 0f64 }).collect::<Vec<_>>();
            LinearConstraint::new(coefficients, ConstraintType::Equal, amount)
        });
    let demand = [10f64, 25f64, 15f64].iter().enumerate()
        .map(|(i, &amount)| {
            let coefficients = (0..6).map(|j| if j % 3 == i { 1f64 } else { 0f64 }).collect::<Vec<_>>();
            LinearConstraint::new(coefficients, ConstraintType::Equal, amount)
        });

    (objective, supply.chain(demand).collect())
}

#[test]
fn transportation_problem() {
    let (objective, constraints) = transportation();

    let mut solver = SimplexSolver::new();
    let solution = solver.optimize(&objective, &constraints, Objective::Minimize, true).unwrap();
    assert_abs_diff_eq!(solution.value(), 465f64, epsilon = 1e-9);
    let expected = [0f64, 20f64, 0f64, 10f64, 5f64, 15f64];
    for (&computed, &expected) in solution.point().iter().zip(&expected) {
        assert_abs_diff_eq!(computed, expected, epsilon = 1e-9);
    }
    assert!(constraints.iter().all(|c| c.is_satisfied_by(solution.point(), 1e-9)));
    assert!(solver.iterations() > 0);
}

#[test]
fn transportation_problem_first_profitable() {
    let (objective, constraints) = transportation();

    let mut solver = SimplexSolver::<f64, FirstProfitable>::with_rule(SolverConfig::default());
    let solution = solver.optimize(&objective, &constraints, Objective::Minimize, true).unwrap();
    assert_abs_diff_eq!(solution.value(), 465f64, epsilon = 1e-9);
}

#[test]
fn transportation_problem_short_supply() {
    let (objective, mut constraints) = transportation();
    constraints[0] = LinearConstraint::new(
        vec![1f64, 1f64, 1f64, 0f64, 0f64, 0f64],
        ConstraintType::Equal,
        10f64,
    );

    let mut solver = SimplexSolver::new();
    let result = solver.optimize(&objective, &constraints, Objective::Minimize, true);
    assert_eq!(result, Err(SolveError::Infeasible));
}

#[test]
fn production_planning() {
    // Maximize 3x + 2y subject to x + y <= 4, x + 3y <= 6 and x <= 3
    let objective = LinearObjectiveFunction::new(vec![3f64, 2f64], 0f64);
    let constraints = [
        LinearConstraint::new(vec![1f64, 1f64], ConstraintType::Less, 4f64),
        LinearConstraint::new(vec![1f64, 3f64], ConstraintType::Less, 6f64),
        LinearConstraint::new(vec![1f64, 0f64], ConstraintType::Less, 3f64),
    ];

    let mut solver = SimplexSolver::new();
    let (point, value) = solver.optimize(&objective, &constraints, Objective::Maximize, true)
        .unwrap()
        .into_parts();
    assert_abs_diff_eq!(point[0], 3f64, epsilon = 1e-9);
    assert_abs_diff_eq!(point[1], 1f64, epsilon = 1e-9);
    assert_abs_diff_eq!(value, 11f64, epsilon = 1e-9);
}

#[test]
fn covering() {
    // Minimize 2x + 2y + z subject to x + y >= 1, x + z >= 1 and y >= 1
    let objective = LinearObjectiveFunction::new(vec![2f64, 2f64, 1f64], 0f64);
    let constraints = [
        LinearConstraint::new(vec![1f64, 1f64, 0f64], ConstraintType::Greater, 1f64),
        LinearConstraint::new(vec![1f64, 0f64, 1f64], ConstraintType::Greater, 1f64),
        LinearConstraint::new(vec![0f64, 1f64, 0f64], ConstraintType::Greater, 1f64),
    ];

    let mut solver = SimplexSolver::new();
    let solution = solver.optimize(&objective, &constraints, Objective::Minimize, true).unwrap();
    assert_abs_diff_eq!(solution.value(), 3f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.point()[0], 0f64, epsilon = 1e-9);
}

#[test]
fn solver_is_reusable() {
    let objective = LinearObjectiveFunction::new(vec![1f64], 0f64);
    let bounded = [LinearConstraint::new(vec![1f64], ConstraintType::Less, 5f64)];
    let unbounded = [LinearConstraint::new(vec![1f64], ConstraintType::Greater, 5f64)];

    let mut solver = SimplexSolver::new();
    assert_eq!(
        solver.optimize(&objective, &unbounded, Objective::Maximize, true),
        Err(SolveError::Unbounded),
    );
    let solution = solver.optimize(&objective, &bounded, Objective::Maximize, true).unwrap();
    assert_abs_diff_eq!(solution.value(), 5f64, epsilon = 1e-9);
    assert_eq!(solver.iterations(), 1);
}
