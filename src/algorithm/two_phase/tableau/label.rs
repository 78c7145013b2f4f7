//! # Column labels
//!
//! Every column of the tableau is labelled with the variable it represents. The labels are used to
//! find columns back after columns were removed at the end of the first phase.
use std::fmt::{Display, Formatter, Result as FormatResult};

/// The variable a tableau column belongs to.
///
/// Indices of the numbered variants count within their own group.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColumnLabel {
    /// Objective of the first phase, the sum of all artificial variables.
    ArtificialObjective,
    /// The objective function of the problem.
    Objective,
    Decision(usize),
    /// Shared offset that allows decision variables to take negative values.
    NegativeOffset,
    Slack(usize),
    Artificial(usize),
    RightHandSide,
}

impl ColumnLabel {
    /// Whether this column belongs to an artificial variable.
    pub fn is_artificial(self) -> bool {
        matches!(self, ColumnLabel::Artificial(_))
    }
}

impl Display for ColumnLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            ColumnLabel::ArtificialObjective => write!(f, "W"),
            ColumnLabel::Objective => write!(f, "Z"),
            ColumnLabel::Decision(i) => write!(f, "x{}", i),
            ColumnLabel::NegativeOffset => write!(f, "x-"),
            ColumnLabel::Slack(i) => write!(f, "s{}", i),
            ColumnLabel::Artificial(i) => write!(f, "a{}", i),
            ColumnLabel::RightHandSide => write!(f, "RHS"),
        }
    }
}
