//! Error types for puzzle_core.
//!
//! Only configuration can fail. Partitioning and searching never return an
//! error: missing or ragged input degrades to an empty or partial grid.

use thiserror::Error;

/// Errors raised while building a partition configuration.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// A partition value is non-finite, a negative offset or a non-positive step.
    #[error("Invalid partition value for {field}: {value}")]
    InvalidPartition { field: &'static str, value: f64 },

    /// Layout JSON could not be parsed.
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
