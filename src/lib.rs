//! Confusion-matrix extraction and heatmap rendering for training logs.
//!
//! A training run dumps its confusion matrix into a free-text report; this
//! crate scavenges the integers back out of that text, reshapes them into a
//! square count grid, normalizes each column into per-class prediction
//! rates, and renders the result as a PNG heatmap.
//!
//! ## Architecture
//!
//! - `parse`: best-effort token filter and integer extraction from log lines
//! - `matrix`: `ConfusionMatrix` reconstruction and `RateMatrix` normalization
//! - `render`: plotters heatmap with color bar
//! - `cli` / `config`: clap command surface (`render`, `validate`, `info`)
//!
//! ## Example
//!
//! ```ignore
//! use trazar::run_pipeline;
//!
//! let rates = run_pipeline(
//!     Path::new("errors.txt"),
//!     Path::new("matrix.png"),
//!     100,
//! )?;
//! println!("max rate {:.3}", rates.max_rate());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod matrix;
pub mod parse;
pub mod render;

use std::path::Path;

pub use error::{Result, TrazarError};
pub use matrix::{ConfusionMatrix, RateMatrix, EPSILON};
pub use parse::parse_log;
pub use render::render_heatmap;

/// Default matrix dimension: the class count of the underlying task.
pub const DEFAULT_CLASSES: usize = 100;

/// Run the full pipeline: parse the log at `input`, reshape into an
/// `n_classes` square matrix, column-normalize, and render to `output`.
///
/// Returns the rate matrix so callers can inspect what was drawn.
pub fn run_pipeline(input: &Path, output: &Path, n_classes: usize) -> Result<RateMatrix> {
    let values = parse::parse_log(input)?;
    let matrix = ConfusionMatrix::from_counts(values, n_classes)?;
    let rates = RateMatrix::from_confusion(&matrix);
    render::render_heatmap(&rates, output)?;
    Ok(rates)
}
