//! # Objective functions
use num_traits::Float;

/// A linear function `coefficients · x + constant_term` to be maximized or minimized.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearObjectiveFunction<F> {
    coefficients: Vec<F>,
    constant_term: F,
}

impl<F: Float> LinearObjectiveFunction<F> {
    /// Create a new objective function.
    ///
    /// The number of coefficients determines the number of decision variables of the problem.
    pub fn new(coefficients: Vec<F>, constant_term: F) -> Self {
        Self { coefficients, constant_term }
    }

    /// Evaluate the function at a point.
    ///
    /// # Arguments
    ///
    /// * `point`: A value for each decision variable.
    pub fn value(&self, point: &[F]) -> F {
        debug_assert_eq!(point.len(), self.coefficients.len());

        self.coefficients.iter()
            .zip(point)
            .fold(self.constant_term, |total, (&coefficient, &x)| total + coefficient * x)
    }

    /// Coefficient for each decision variable.
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// The constant added to the value.
    pub fn constant_term(&self) -> F {
        self.constant_term
    }

    /// Number of decision variables.
    pub fn nr_variables(&self) -> usize {
        self.coefficients.len()
    }
}
