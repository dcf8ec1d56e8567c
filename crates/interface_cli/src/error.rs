//! Console error handling

use core_kernel::CoreError;
use domain_policy::PolicyError;
use thiserror::Error;

/// Console error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid setting: {0}")]
    Setting(#[from] CoreError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

impl CliError {
    /// Checks if the session stopped on a malformed ledger line
    pub fn is_data_corruption(&self) -> bool {
        matches!(self, CliError::Policy(e) if e.is_data_corruption())
    }
}
