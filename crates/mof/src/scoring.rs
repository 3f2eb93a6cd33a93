//! Mass-ratio variance, the outlier score at the end of the MOF pipeline.

use distances::number::Float;
use mt_logger::{mt_log, Level};
use rayon::prelude::*;

use crate::dataset::PointSet;
use crate::error::MofError;
use crate::mass_ratio;
use crate::metric::{Metric, ParMetric};
use crate::utils;

/// Scores every point from a mass-ratio matrix.
///
/// Entry `j` of the result is the population variance of column `j` of the
/// matrix with the diagonal element removed. The diagonal is always exactly 1
/// and including it would bias every score toward an artificial neighborhood
/// of stability.
///
/// # Errors
///
/// * [`MofError::InsufficientPoints`] if the matrix has fewer than 2 rows,
///   since removing the diagonal leaves nothing to take a variance over.
/// * [`MofError::NonFiniteResult`] if any score comes out NaN or infinite.
///   Matrices produced by [`mass_ratio::from_neighborhoods`] cannot trigger
///   this; seeing it means the input matrix was malformed.
pub fn from_mass_ratios<F: Float>(mass_ratios: &[Vec<F>]) -> Result<Vec<F>, MofError> {
    let n = mass_ratios.len();
    if n < 2 {
        return Err(MofError::InsufficientPoints { found: n });
    }
    finite((0..n).map(|j| column_score(mass_ratios, j)).collect())
}

/// Parallel version of [`from_mass_ratios`].
///
/// Columns are scored independently, so the result is bit-for-bit identical
/// to the sequential version.
///
/// # Errors
///
/// See [`from_mass_ratios`].
pub fn par_from_mass_ratios<F: Float>(mass_ratios: &[Vec<F>]) -> Result<Vec<F>, MofError> {
    let n = mass_ratios.len();
    if n < 2 {
        return Err(MofError::InsufficientPoints { found: n });
    }
    finite(
        (0..n)
            .into_par_iter()
            .map(|j| column_score(mass_ratios, j))
            .collect(),
    )
}

/// The exclude-self population variance of column `j`.
fn column_score<F: Float>(mass_ratios: &[Vec<F>], j: usize) -> F {
    let column = mass_ratios
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != j)
        .map(|(_, row)| row[j])
        .collect::<Vec<_>>();
    utils::variance(&column, utils::mean(&column))
}

/// Rejects score vectors containing NaN or infinite values.
fn finite<F: Float>(scores: Vec<F>) -> Result<Vec<F>, MofError> {
    match scores.iter().position(|s| !s.as_f64().is_finite()) {
        Some(index) => Err(MofError::NonFiniteResult { index }),
        None => Ok(scores),
    }
}

/// Computes the Mass-ratio Outlier Factor of every point in `data`.
///
/// Runs the full pipeline: pairwise distances under `metric`, neighborhood
/// counts, mass ratios, then the exclude-self variance of each point's column.
/// Scores are non-negative and returned in input order; higher scores mean a
/// more asymmetric local density context, flagging likely outliers.
///
/// # Errors
///
/// * [`MofError::InsufficientPoints`] if `data` holds a single point.
/// * [`MofError::NonFiniteResult`] if a score comes out non-finite, which the
///   pipeline invariants rule out for any valid `PointSet`.
///
/// # Examples
///
/// ```
/// use mof::{metric::Euclidean, scoring, PointSet};
///
/// let data = PointSet::new(vec![
///     vec![906.0_f64, 892.0],
///     vec![870.0, 323.0],
///     vec![433.0, 480.0],
///     vec![602.0, 695.0],
///     vec![569.0, 849.0],
/// ])?;
/// let scores = scoring::mof(&data, &Euclidean)?;
/// assert!((scores[1] - 0.380_208_333).abs() < 1e-6);
/// # Ok::<(), mof::MofError>(())
/// ```
pub fn mof<I, F: Float, M: Metric<I, F>>(data: &PointSet<I>, metric: &M) -> Result<Vec<F>, MofError> {
    mt_log!(
        Level::Debug,
        "Scoring {} points of dimensionality {} under the {} metric.",
        data.cardinality(),
        data.dimensionality(),
        metric.name()
    );
    from_mass_ratios(&mass_ratio::matrix(data, metric))
}

/// Parallel version of [`mof`], bit-for-bit identical to it.
///
/// # Errors
///
/// See [`mof`].
pub fn par_mof<I, F, M>(data: &PointSet<I>, metric: &M) -> Result<Vec<F>, MofError>
where
    I: Send + Sync,
    F: Float,
    M: ParMetric<I, F>,
{
    mt_log!(
        Level::Debug,
        "Scoring {} points of dimensionality {} under the {} metric, in parallel.",
        data.cardinality(),
        data.dimensionality(),
        metric.name()
    );
    par_from_mass_ratios(&mass_ratio::par_matrix(data, metric))
}
