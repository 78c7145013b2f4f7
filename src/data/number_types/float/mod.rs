//! # Floating point numbers
//!
//! Correctness guarantees are harder to give than for exact number types due to (accumulating)
//! rounding errors, so values are compared up to an `epsilon`.
pub mod numerical_precision;
