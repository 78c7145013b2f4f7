//! # Strategies
//!
//! Choices that can be made independently of the rest of the algorithm.
pub mod pivot_rule;
