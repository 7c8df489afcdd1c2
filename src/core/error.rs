use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during invoice construction or rendering.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Invoice totals or line arithmetic inconsistency.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// Document composition or layout error.
    #[error("render error: {0}")]
    Render(String),

    /// A configured asset (logo image) could not be read. Fatal: rendering
    /// aborts before any output is written.
    #[error("missing asset {}: {source}", path.display())]
    MissingAsset {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output write failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF object or stream encoding failure.
    #[error("pdf error: {0}")]
    Pdf(#[from] lopdf::Error),
}
