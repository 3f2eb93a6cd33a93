//! The `Euclidean` distance metric.

use distances::number::Float;

use super::{Metric, ParMetric};

/// The `Euclidean` (L2) distance metric.
///
/// This is the metric MOF is defined over; the pipeline entry points accept
/// any [`Metric`] but the scores in the literature use this one.
pub struct Euclidean;

impl<I: AsRef<[T]>, T: Float> Metric<I, T> for Euclidean {
    fn distance(&self, a: &I, b: &I) -> T {
        distances::vectors::euclidean(a.as_ref(), b.as_ref())
    }

    fn name(&self) -> &str {
        "euclidean"
    }

    fn has_identity(&self) -> bool {
        true
    }

    fn has_symmetry(&self) -> bool {
        true
    }
}

impl<I: AsRef<[T]> + Send + Sync, T: Float> ParMetric<I, T> for Euclidean {}
