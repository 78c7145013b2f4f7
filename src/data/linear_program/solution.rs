//! # Representation of optimal solutions
//!
//! Once a linear program is solved, the value of every decision variable is reported together with
//! the value of the objective function at that point.

/// An optimal point together with the objective function value it attains.
///
/// The objective value includes the constant term of the objective function.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of each decision variable, in the order of the objective coefficients.
    point: Vec<F>,
    /// Value of the objective function for this solution.
    value: F,
}

impl<F: Copy> Solution<F> {
    /// Create a new `Solution` instance.
    pub fn new(point: Vec<F>, value: F) -> Self {
        Self { point, value }
    }

    /// Value of each decision variable.
    pub fn point(&self) -> &[F] {
        &self.point
    }

    /// Objective function value.
    pub fn value(&self) -> F {
        self.value
    }

    /// Split into the decision vector and the objective value.
    pub fn into_parts(self) -> (Vec<F>, F) {
        (self.point, self.value)
    }
}
