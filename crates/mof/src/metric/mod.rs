//! The `Metric` trait is used for all distance computations in the MOF
//! pipeline.

use distances::Number;

mod euclidean;
mod manhattan;

pub use euclidean::Euclidean;
pub use manhattan::Manhattan;

/// A distance function between items, together with the properties the
/// pipeline relies on when building pairwise matrices.
///
/// # Type Parameters
///
/// - `I`: The type of the items.
/// - `T`: The type of the distance values.
pub trait Metric<I, T: Number> {
    /// Call the metric on two items.
    fn distance(&self, a: &I, b: &I) -> T;

    /// The name of the metric.
    fn name(&self) -> &str;

    /// Whether the metric provides an identity among the items.
    ///
    /// Identity is defined as `d(a, b) = 0` if and only if `a = b`.
    ///
    /// This is used when computing the diagonal of a pairwise distance matrix.
    fn has_identity(&self) -> bool;

    /// Whether the metric is symmetric.
    ///
    /// Symmetry is defined as `d(a, b) = d(b, a)` for all items `a` and `b`.
    ///
    /// This is used when computing the lower triangle of a pairwise distance
    /// matrix and mirroring it into the upper triangle.
    fn has_symmetry(&self) -> bool;

    /// Whether an item is equal to another item. Items can only be equal if
    /// the metric provides an identity.
    ///
    /// This is a convenience function that checks if the distance between two
    /// items is zero.
    fn is_equal(&self, a: &I, b: &I) -> bool {
        self.has_identity() && self.distance(a, b) == T::ZERO
    }
}

/// Parallel version of [`Metric`].
#[allow(clippy::module_name_repetitions)]
pub trait ParMetric<I: Send + Sync, T: Number>: Metric<I, T> + Send + Sync {
    /// Parallel version of [`Metric::distance`].
    ///
    /// The default implementation calls the non-parallel version of the
    /// distance function.
    fn par_distance(&self, a: &I, b: &I) -> T {
        self.distance(a, b)
    }
}
