//! Mass-ratio computation, the third stage of the MOF pipeline.

use distances::number::Float;
use rayon::prelude::*;

use crate::dataset::PointSet;
use crate::metric::{Metric, ParMetric};
use crate::neighborhood;

/// Divides a neighborhood matrix element-wise by its transpose:
/// `mr[i][j] = nbh[i][j] / nbh[j][i]`.
///
/// Neighborhood counts always lie in `[1, n]`, so every ratio is finite and
/// positive. The diagonal is exactly 1, and `mr[i][j] * mr[j][i] == 1` up to
/// rounding.
#[must_use]
pub fn from_neighborhoods<F: Float>(neighborhoods: &[Vec<usize>]) -> Vec<Vec<F>> {
    neighborhoods
        .iter()
        .enumerate()
        .map(|(i, row)| ratio_row(neighborhoods, i, row))
        .collect()
}

/// Parallel version of [`from_neighborhoods`].
///
/// Rows are independent, so the result is bit-for-bit identical to the
/// sequential version.
#[must_use]
pub fn par_from_neighborhoods<F: Float>(neighborhoods: &[Vec<usize>]) -> Vec<Vec<F>> {
    neighborhoods
        .par_iter()
        .enumerate()
        .map(|(i, row)| ratio_row(neighborhoods, i, row))
        .collect()
}

/// One row of the mass-ratio matrix.
fn ratio_row<F: Float>(neighborhoods: &[Vec<usize>], i: usize, row: &[usize]) -> Vec<F> {
    row.iter()
        .enumerate()
        .map(|(j, &n_ij)| F::from(n_ij) / F::from(neighborhoods[j][i]))
        .collect()
}

/// Computes the full mass-ratio matrix of a point set under the given metric.
pub fn matrix<I, F: Float, M: Metric<I, F>>(data: &PointSet<I>, metric: &M) -> Vec<Vec<F>> {
    from_neighborhoods(&neighborhood::matrix(data, metric))
}

/// Parallel version of [`matrix`].
pub fn par_matrix<I, F, M>(data: &PointSet<I>, metric: &M) -> Vec<Vec<F>>
where
    I: Send + Sync,
    F: Float,
    M: ParMetric<I, F>,
{
    par_from_neighborhoods(&neighborhood::par_matrix(data, metric))
}
