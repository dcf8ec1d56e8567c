//! Storage error types
//!
//! Every variant carries the path of the file involved; ledger corruption
//! also carries the 1-based line number.

use std::path::PathBuf;

use domain_policy::PortError;
use thiserror::Error;

/// Errors that can occur while reading or writing the flat files
#[derive(Debug, Error)]
pub enum StoreError {
    /// The defaults file does not hold exactly one well-formed record
    #[error("Malformed defaults file {}: {message}", path.display())]
    Format {
        path: PathBuf,
        message: String,
    },

    /// A ledger line could not be parsed
    #[error("Corrupt ledger {} at line {line}: {message}", path.display())]
    DataCorruption {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The filesystem refused an operation
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        StoreError::Format {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Checks if this error is a malformed ledger line
    pub fn is_data_corruption(&self) -> bool {
        matches!(self, StoreError::DataCorruption { .. })
    }
}

impl From<StoreError> for PortError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Format { path, message } => PortError::Format {
                source_name: path.display().to_string(),
                message,
            },
            StoreError::DataCorruption {
                path,
                line,
                message,
            } => PortError::DataCorruption {
                source_name: path.display().to_string(),
                line,
                message,
            },
            StoreError::Io { path, source } => PortError::Io {
                source_name: path.display().to_string(),
                source,
            },
        }
    }
}
