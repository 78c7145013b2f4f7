//! # Errors
//!
//! Reasons why solving a linear program did not produce an optimal solution.
use thiserror::Error;

/// Outcome of a solve that did not end in an optimum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// No point satisfies all constraints.
    #[error("the problem is infeasible")]
    Infeasible,

    /// The objective can be improved without limit.
    #[error("the problem is unbounded")]
    Unbounded,

    /// The configured maximum number of pivots was exceeded, contains the iteration count that
    /// exceeded it.
    #[error("maximal iteration count exceeded: {0}")]
    IterationLimitExceeded(usize),

    /// The input does not describe a linear program that can be solved.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}
