//! Errors reported at the stage boundaries of the MOF pipeline.

use thiserror::Error;

/// The ways in which building a [`PointSet`](crate::PointSet) or running the
/// MOF pipeline can fail.
///
/// Every variant is detected at the stage boundary whose precondition it
/// violates; no stage attempts recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MofError {
    /// No points were supplied where at least one is required.
    #[error("the point set is empty")]
    EmptyInput,

    /// A point's dimensionality differed from that of the first point.
    #[error("point {index} has dimensionality {found}, expected {expected}")]
    DimensionMismatch {
        /// The dimensionality of the first point.
        expected: usize,
        /// The dimensionality of the offending point.
        found: usize,
        /// The index of the offending point.
        index: usize,
    },

    /// Too few points to score: removing the diagonal from a column of the
    /// mass-ratio matrix leaves nothing to take a variance over.
    #[error("MOF requires at least 2 points, got {found}")]
    InsufficientPoints {
        /// The number of points supplied.
        found: usize,
    },

    /// A score came out NaN or infinite. The pipeline invariants rule this out
    /// for well-formed inputs, so this indicates a malformed intermediate
    /// matrix.
    #[error("non-finite score for point {index}")]
    NonFiniteResult {
        /// The index of the point whose score was non-finite.
        index: usize,
    },
}
