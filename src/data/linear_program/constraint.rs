//! # Linear constraints
//!
//! A single linear (in)equality over the decision variables of a problem.
use itertools::{EitherOrBoth, Itertools};
use num_traits::Float;

use crate::data::linear_program::elements::ConstraintType;
use crate::data::number_types::float::numerical_precision::approx_equal;

/// A constraint of the form `coefficients · x relation value`.
///
/// Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearConstraint<F> {
    /// One coefficient per decision variable.
    coefficients: Vec<F>,
    relation: ConstraintType,
    /// Right hand side.
    value: F,
}

impl<F: Float> LinearConstraint<F> {
    /// Create a new constraint.
    ///
    /// # Arguments
    ///
    /// * `coefficients`: One coefficient for each decision variable of the problem.
    /// * `relation`: Relation between the left and the right hand side.
    /// * `value`: Right hand side.
    pub fn new(coefficients: Vec<F>, relation: ConstraintType, value: F) -> Self {
        Self { coefficients, relation, value }
    }

    /// Create a constraint with variables on both sides.
    ///
    /// Describes `lhs_coefficients · x + lhs_constant relation rhs_coefficients · x + rhs_constant`,
    /// which gets stored as `(lhs - rhs) · x relation rhs_constant - lhs_constant`. When one of the
    /// sides has fewer coefficients, the missing ones are zero.
    pub fn from_sides(
        lhs_coefficients: &[F],
        lhs_constant: F,
        relation: ConstraintType,
        rhs_coefficients: &[F],
        rhs_constant: F,
    ) -> Self {
        let coefficients = lhs_coefficients.iter()
            .zip_longest(rhs_coefficients.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(&lhs, &rhs) => lhs - rhs,
                EitherOrBoth::Left(&lhs) => lhs,
                EitherOrBoth::Right(&rhs) => -rhs,
            })
            .collect();

        Self::new(coefficients, relation, rhs_constant - lhs_constant)
    }

    /// Rewrite the constraint such that the right hand side is non negative.
    ///
    /// Both sides get multiplied by `-1` when the right hand side is negative, which flips the
    /// relation. A constraint with a non negative right hand side is returned unchanged.
    #[must_use]
    pub fn normalize(self) -> Self {
        if self.value < F::zero() {
            Self {
                coefficients: self.coefficients.into_iter().map(|c| -c).collect(),
                relation: !self.relation,
                value: -self.value,
            }
        } else {
            self
        }
    }

    /// Whether a point satisfies this constraint, up to a tolerance.
    ///
    /// # Arguments
    ///
    /// * `point`: Value for each decision variable, of the same length as the coefficients.
    /// * `epsilon`: Allowed violation.
    pub fn is_satisfied_by(&self, point: &[F], epsilon: F) -> bool {
        debug_assert_eq!(point.len(), self.coefficients.len());

        let lhs = self.coefficients.iter()
            .zip(point)
            .fold(F::zero(), |total, (&coefficient, &x)| total + coefficient * x);

        match self.relation {
            ConstraintType::Equal => approx_equal(lhs, self.value, epsilon),
            ConstraintType::Greater => lhs >= self.value - epsilon,
            ConstraintType::Less => lhs <= self.value + epsilon,
        }
    }

    /// Coefficient for each decision variable.
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// Relation between the two sides.
    pub fn relation(&self) -> ConstraintType {
        self.relation
    }

    /// Right hand side.
    pub fn value(&self) -> F {
        self.value
    }

    /// Sum of all coefficients, negated.
    ///
    /// This is the coefficient of the shared offset variable used to represent variables that are
    /// not restricted in sign.
    pub(crate) fn inverted_coefficient_sum(&self) -> F {
        inverted_sum(&self.coefficients)
    }
}

/// Negative of the sum of some values.
pub(crate) fn inverted_sum<F: Float>(values: &[F]) -> F {
    -values.iter().fold(F::zero(), |total, &value| total + value)
}
