//! Error types for the toxfilter crate.

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, ToxfilterError>;

/// Errors produced by ingestion, training, and inference.
#[derive(Debug, Error)]
pub enum ToxfilterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("column '{0}' not found in CSV header")]
    MissingColumn(String),

    #[error("training pool is empty after cleaning")]
    EmptyPool,

    /// A stratified split cannot place at least one example of every class
    /// on both sides. Fatal: the run cannot proceed.
    #[error("degenerate split: class {label} has only {count} example(s)")]
    DegenerateSplit { label: u8, count: usize },

    #[error("feature rows ({rows}) and labels ({labels}) differ in length")]
    Shape { rows: usize, labels: usize },

    #[error("model artifact not found: {0}")]
    ModelNotFound(String),
}
