#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod dataset;
mod error;
pub mod mass_ratio;
pub mod metric;
pub mod neighborhood;
pub mod scoring;
pub mod utils;

pub use dataset::PointSet;
pub use error::MofError;
pub use metric::{Euclidean, Manhattan, Metric, ParMetric};
pub use scoring::{mof, par_mof};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
