//! A `PointSet` is an immutable, ordered collection of points.

use distances::Number;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::MofError;
use crate::metric::{Metric, ParMetric};

/// An immutable, ordered collection of points with a uniform dimensionality.
///
/// Point identity is positional: index `i` here names the same point in every
/// matrix the pipeline derives from this set. The collection is never mutated
/// by any stage.
///
/// # Type Parameters
///
/// - `I`: The type of the points.
#[derive(Clone, Serialize, Deserialize)]
pub struct PointSet<I> {
    /// The points, in the order that defines their identity.
    points: Vec<I>,
    /// The dimensionality shared by all points.
    dimensionality: usize,
    /// The name of the point set.
    name: String,
}

impl<T: Number> PointSet<Vec<T>> {
    /// Creates a new `PointSet` from tabular data, one row per point.
    ///
    /// # Errors
    ///
    /// * [`MofError::EmptyInput`] if `points` is empty.
    /// * [`MofError::DimensionMismatch`] if any row differs in length from the
    ///   first row.
    pub fn new(points: Vec<Vec<T>>) -> Result<Self, MofError> {
        let dimensionality = points.first().map(Vec::len).ok_or(MofError::EmptyInput)?;
        match points
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != dimensionality)
        {
            Some((index, found)) => Err(MofError::DimensionMismatch {
                expected: dimensionality,
                found,
                index,
            }),
            None => Ok(Self {
                points,
                dimensionality,
                name: "Unknown PointSet".to_string(),
            }),
        }
    }
}

impl<I> PointSet<I> {
    /// The number of points in the set.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.points.len()
    }

    /// The dimensionality shared by all points in the set.
    #[must_use]
    pub const fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    /// The point at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> &I {
        &self.points[index]
    }

    /// The points, in order.
    #[must_use]
    pub fn points(&self) -> &[I] {
        &self.points
    }

    /// The name of the point set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the point set.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Computes the full pairwise distance matrix of the set under the given
    /// metric.
    ///
    /// When the metric has symmetry, only the lower triangle is computed and
    /// it is mirrored into the upper triangle. When the metric has an
    /// identity, the diagonal is left at zero without calling the metric.
    pub fn pairwise<T: Number, M: Metric<I, T>>(&self, metric: &M) -> Vec<Vec<T>> {
        let n = self.points.len();
        let mut matrix = vec![vec![T::ZERO; n]; n];

        if metric.has_symmetry() {
            for i in 0..n {
                for j in 0..i {
                    let d = metric.distance(&self.points[i], &self.points[j]);
                    matrix[i][j] = d;
                    matrix[j][i] = d;
                }
            }
        } else {
            for i in 0..n {
                for j in 0..n {
                    if i != j {
                        matrix[i][j] = metric.distance(&self.points[i], &self.points[j]);
                    }
                }
            }
        }

        if !metric.has_identity() {
            for (i, row) in matrix.iter_mut().enumerate() {
                row[i] = metric.distance(&self.points[i], &self.points[i]);
            }
        }

        matrix
    }
}

impl<I: Send + Sync> PointSet<I> {
    /// Parallel version of [`PointSet::pairwise`].
    ///
    /// Rows are computed independently, so the result is bit-for-bit identical
    /// to the sequential version.
    pub fn par_pairwise<T, M>(&self, metric: &M) -> Vec<Vec<T>>
    where
        T: Number,
        M: ParMetric<I, T>,
    {
        self.points
            .par_iter()
            .enumerate()
            .map(|(i, a)| {
                self.points
                    .iter()
                    .enumerate()
                    .map(|(j, b)| {
                        if i == j && metric.has_identity() {
                            T::ZERO
                        } else {
                            metric.distance(a, b)
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
