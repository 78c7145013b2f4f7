//! # Number types
//!
//! The solver is written against the `num_traits::Float` trait, such that it can be used with both
//! `f32` and `f64`. Because floating point arithmetic accumulates rounding errors, all comparisons
//! are made with a tolerance; the helpers for that live here.
pub mod float;
