//! Data loading error types

use thiserror::Error;

/// Result type alias for data loading
pub type DataResult<T> = std::result::Result<T, DataError>;

/// Data loading error types
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV error: {0}")]
    Tsv(#[from] csv::Error),

    #[error("Malformed record on line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error(transparent)]
    Core(#[from] campath_core::Error),
}

impl DataError {
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            message: message.into(),
        }
    }
}
