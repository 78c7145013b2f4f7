//! # Algorithms
pub mod error;
pub mod two_phase;

pub use error::SolveError;
