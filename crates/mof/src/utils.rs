//! Utility functions for the crate.

use distances::{number::Float, Number};

/// Return the mean value of the given slice of values.
pub fn mean<T: Number, F: Float>(values: &[T]) -> F {
    F::from(values.iter().copied().sum::<T>()) / F::from(values.len())
}

/// Return the population variance of the given slice of values, with the
/// divisor equal to the number of values.
///
/// Computed as the mean of squared deviations from the given mean, so the
/// result is never negative.
pub fn variance<T: Number, F: Float>(values: &[T], mean: F) -> F {
    values
        .iter()
        .map(|v| F::from(*v))
        .map(|v| v - mean)
        .map(|v| v.powi(2))
        .sum::<F>()
        / F::from(values.len())
}
