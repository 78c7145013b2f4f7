//! # A dense linear program solver
//!
//! Linear programs are solved using the two phase primal Simplex method on a dense tableau, as
//! described in the book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth
//! Steiglitz.
//!
//! ```
//! use dense_simplex::algorithm::two_phase::SimplexSolver;
//! use dense_simplex::data::linear_program::constraint::LinearConstraint;
//! use dense_simplex::data::linear_program::elements::{ConstraintType, Objective};
//! use dense_simplex::data::linear_program::objective::LinearObjectiveFunction;
//!
//! // Maximize 3x + 2y subject to x + y <= 4 and x + 3y <= 6
//! let objective = LinearObjectiveFunction::new(vec![3f64, 2f64], 0f64);
//! let constraints = [
//!     LinearConstraint::new(vec![1f64, 1f64], ConstraintType::Less, 4f64),
//!     LinearConstraint::new(vec![1f64, 3f64], ConstraintType::Less, 6f64),
//! ];
//!
//! let mut solver = SimplexSolver::new();
//! let solution = solver.optimize(&objective, &constraints, Objective::Maximize, true)?;
//! assert_eq!(solution.point(), &[4f64, 0f64]);
//! assert_eq!(solution.value(), 12f64);
//! # Ok::<(), dense_simplex::algorithm::SolveError>(())
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
