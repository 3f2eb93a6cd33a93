//! Neighborhood counting, the second stage of the MOF pipeline.
//!
//! For a reference point `q`, the neighborhood count of a candidate point `i`
//! is the number of points at least as close to `q` as `i` is. This is an
//! inclusive rank over one row of the distance matrix: ties count toward each
//! other, every point counts itself, and all counts lie in `[1, n]`.

use distances::Number;
use rayon::prelude::*;

use crate::dataset::PointSet;
use crate::metric::{Metric, ParMetric};

/// Computes the neighborhood counts for one row of a distance matrix.
///
/// Entry `i` of the result is the number of entries in `row` that are less
/// than or equal to `row[i]`. The comparison is inclusive by design; switching
/// it to strict changes every downstream ratio.
///
/// # Examples
///
/// ```
/// use mof::neighborhood;
///
/// let row = [2.0_f64, 3.0, 6.0, 1.0, 8.0];
/// assert_eq!(neighborhood::counts(&row), vec![2, 3, 4, 1, 5]);
/// ```
#[must_use]
pub fn counts<T: Number>(row: &[T]) -> Vec<usize> {
    row.iter()
        .map(|&d| row.iter().filter(|&&p| p <= d).count())
        .collect()
}

/// Applies [`counts`] to every row of a distance matrix.
///
/// Row `q` of the result holds the neighborhood counts of all points with
/// respect to reference point `q`, in the same row-major order as the input.
#[must_use]
pub fn from_distances<T: Number>(distances: &[Vec<T>]) -> Vec<Vec<usize>> {
    distances.iter().map(|row| counts(row)).collect()
}

/// Parallel version of [`from_distances`].
///
/// Rows are independent, so the result is identical to the sequential
/// version.
#[must_use]
pub fn par_from_distances<T: Number>(distances: &[Vec<T>]) -> Vec<Vec<usize>> {
    distances.par_iter().map(|row| counts(row)).collect()
}

/// Computes the full neighborhood matrix of a point set under the given
/// metric.
pub fn matrix<I, T: Number, M: Metric<I, T>>(data: &PointSet<I>, metric: &M) -> Vec<Vec<usize>> {
    from_distances(&data.pairwise(metric))
}

/// Parallel version of [`matrix`].
pub fn par_matrix<I, T, M>(data: &PointSet<I>, metric: &M) -> Vec<Vec<usize>>
where
    I: Send + Sync,
    T: Number,
    M: ParMetric<I, T>,
{
    par_from_distances(&data.par_pairwise(metric))
}
