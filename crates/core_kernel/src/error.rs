//! Core error types used across the system

use thiserror::Error;
use crate::money::MoneyError;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Cannot parse {kind} from '{value}'")]
    Parse {
        kind: &'static str,
        value: String,
    },
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn parse(kind: &'static str, value: impl Into<String>) -> Self {
        CoreError::Parse {
            kind,
            value: value.into(),
        }
    }
}
