//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for explorer operations
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The results root contains no geography subdirectories
    #[error("no result subdirectories found in '{}'", root.display())]
    EmptyResults { root: PathBuf },

    /// Artifact discovery failed for a geography directory
    #[error("failed to search '{}': {message}", path.display())]
    SearchTree { path: PathBuf, message: String },

    /// A sequence-statistics TSV exists but cannot be interpreted
    #[error("malformed stats file '{}': {message}", path.display())]
    MalformedStatsFile { path: PathBuf, message: String },

    /// A candidate directory matched but its expected metadata file is absent
    #[error("expected metadata file '{filename}' missing from '{}'", dir.display())]
    MissingMetadataFile { dir: PathBuf, filename: String },

    /// Every geography failed to yield a statistics row
    #[error("no statistics could be compiled from any geography")]
    EmptyAggregation,

    /// Two raw directories cleaned to the same geography name
    #[error(
        "directories '{}' and '{}' both resolve to geography '{clean}'",
        first.display(),
        second.display()
    )]
    GeographyCollision {
        first: PathBuf,
        second: PathBuf,
        clean: String,
    },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TSV parsing errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// Columnar serialization errors
    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),

    /// Spreadsheet serialization errors
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl ExplorerError {
    /// Create a search error with path context
    pub fn search(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SearchTree {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-stats error with path context
    pub fn malformed_stats(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MalformedStatsFile {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, ExplorerError>;
