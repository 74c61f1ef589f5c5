//! Dataset loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading a detection dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin}: failed to read CSV headers: {source}")]
    Headers {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("{origin}: missing required column '{column}' (expected time, x, y)")]
    MissingColumn {
        origin: String,
        column: &'static str,
    },

    #[error("{origin}: row {row}: {source}")]
    Row {
        origin: String,
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("{origin}: row {row}: '{value}' is not a recognized date-time")]
    InvalidTimestamp {
        origin: String,
        row: usize,
        value: String,
    },
}
