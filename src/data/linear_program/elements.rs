//! # Building blocks to describe linear programs.
use std::ops::{Neg, Not};

use enum_map::Enum;
use num_traits::One;

/// A `Constraint` is a type of (in)equality.
///
/// The variants read as "left hand side `relation` right hand side".
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl ConstraintType {
    /// Coefficient of the slack variable that turns this constraint into an equality.
    ///
    /// Upper bounds (`Less`) need positive slacks, lower bounds (`Greater`) need negative slacks.
    /// Equality constraints don't get a slack.
    #[must_use]
    pub fn slack_coefficient<F: One + Neg<Output = F>>(self) -> Option<F> {
        match self {
            ConstraintType::Equal => None,
            ConstraintType::Greater => Some(-F::one()),
            ConstraintType::Less => Some(F::one()),
        }
    }

    /// Whether a row with this constraint type needs an artificial variable to have an initial
    /// basic variable.
    ///
    /// Assumes a non negative right hand side, so the slack of a `Less` constraint can start in the
    /// basis.
    #[must_use]
    pub fn needs_artificial(self) -> bool {
        match self {
            ConstraintType::Equal | ConstraintType::Greater => true,
            ConstraintType::Less => false,
        }
    }
}

/// The relation after multiplying both sides with `-1`.
impl Not for ConstraintType {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            ConstraintType::Equal => ConstraintType::Equal,
            ConstraintType::Greater => ConstraintType::Less,
            ConstraintType::Less => ConstraintType::Greater,
        }
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}
