//! # Representing linear programs
//!
//! A linear program is described by a `LinearObjectiveFunction` and a list of `LinearConstraint`s,
//! each of which may be an equality or an inequality in either direction.
pub mod constraint;
pub mod elements;
pub mod objective;
pub mod solution;
