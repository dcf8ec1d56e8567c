//! Policy domain errors
//!
//! This module defines all error types that can occur within the
//! premium and issuance domain.

use thiserror::Error;

use crate::ports::PortError;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Caller-supplied input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// A persistence or collaborator port failed
    #[error(transparent)]
    Port(#[from] PortError),

    /// Workflow was driven from a state that does not allow the step
    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition {
        from: String,
        to: String,
    },
}

impl PolicyError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PolicyError::Validation(message.into())
    }

    /// Returns true when the error came from a malformed ledger line
    pub fn is_data_corruption(&self) -> bool {
        matches!(self, PolicyError::Port(PortError::DataCorruption { .. }))
    }
}

impl From<validator::ValidationErrors> for PolicyError {
    fn from(errors: validator::ValidationErrors) -> Self {
        PolicyError::Validation(errors.to_string())
    }
}

impl From<core_kernel::CoreError> for PolicyError {
    fn from(error: core_kernel::CoreError) -> Self {
        PolicyError::Validation(error.to_string())
    }
}
