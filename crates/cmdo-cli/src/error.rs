//! Error types for cmdo CLI.
//!
//! CliError wraps CoreError from the shared library and adds CLI-specific variants.

use cmdo_core::error::CoreError;
use thiserror::Error;

pub use cmdo_core::error::{ConfigError, WriterError};

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_ARGS: i32 = 4;
    pub const PARTIAL_FAILURE: i32 = 5;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Partial failure: {succeeded} succeeded, {failed} failed")]
    PartialFailure { succeeded: usize, failed: usize },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(CoreError::Writer(WriterError::InvalidOutputMode(_))) => {
                exit_codes::INVALID_ARGS
            }
            CliError::Core(CoreError::Config(ConfigError::NotFound(_))) => exit_codes::INVALID_ARGS,
            CliError::Core(_) => exit_codes::GENERAL_ERROR,
            CliError::InvalidArgument(_) => exit_codes::INVALID_ARGS,
            CliError::PartialFailure { .. } => exit_codes::PARTIAL_FAILURE,
        }
    }
}

impl From<WriterError> for CliError {
    fn from(e: WriterError) -> Self {
        CliError::Core(CoreError::Writer(e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Core(CoreError::Config(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mode_exit_code() {
        let err: CliError = WriterError::InvalidOutputMode("json".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::INVALID_ARGS);
        assert_eq!(
            format!("{}", err),
            "Writer error: Invalid output mode 'json', expected 'file' or 'stdout'"
        );
    }

    #[test]
    fn test_partial_failure_exit_code() {
        let err = CliError::PartialFailure {
            succeeded: 2,
            failed: 1,
        };
        assert_eq!(err.exit_code(), exit_codes::PARTIAL_FAILURE);
        assert_eq!(format!("{}", err), "Partial failure: 2 succeeded, 1 failed");
    }

    #[test]
    fn test_parse_error_exit_code() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CliError = ConfigError::Parse(parse_err).into();
        assert_eq!(err.exit_code(), exit_codes::GENERAL_ERROR);
    }
}
