//! # Linear algebra primitives
//!
//! The simplex tableau is small enough to be stored densely; this module provides that storage.

pub mod matrix;
