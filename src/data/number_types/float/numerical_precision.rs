//! Helper methods for the accuracy of floating point calculations.
use std::cmp::Ordering;

use num_traits::Float;

/// Tolerance used when no other value is configured.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Whether two values are equal up to an absolute tolerance.
///
/// # Arguments
///
/// * `a`, `b`: Values to compare.
/// * `epsilon`: Largest absolute difference that is still considered equal, non negative.
pub fn approx_equal<F: Float>(a: F, b: F, epsilon: F) -> bool {
    debug_assert!(epsilon >= F::zero());

    (a - b).abs() <= epsilon
}

/// Compare two values with a tolerance.
///
/// # Return value
///
/// `Ordering::Equal` if the values are within `epsilon` of each other, otherwise the ordering of
/// `a` with respect to `b`.
pub fn compare<F: Float>(a: F, b: F, epsilon: F) -> Ordering {
    if approx_equal(a, b, epsilon) {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Whether a value is strictly positive beyond the tolerance.
pub fn is_positive<F: Float>(value: F, epsilon: F) -> bool {
    compare(value, F::zero(), epsilon) == Ordering::Greater
}

/// Whether a value is strictly negative beyond the tolerance.
pub fn is_negative<F: Float>(value: F, epsilon: F) -> bool {
    compare(value, F::zero(), epsilon) == Ordering::Less
}
