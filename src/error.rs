//! Unified error types for easy-as-pypi
//!
//! This module defines all error types used throughout the application
//! and the invocation harness. Uses thiserror for ergonomic error definitions.

use crate::testing::Failure;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration loading/rendering
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (streams, file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from configuration parsing and rendering
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Failed to read or parse config file
    #[error("Failed to parse configuration {path}: {message}")]
    ParseError { path: String, message: String },

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Errors raised by the invocation harness itself
///
/// These never describe what the entry point did; they mean the isolated
/// context could not be built, or strict mode asked for failures back.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Environment override that no process environment could hold
    #[error("Invalid environment variable '{key}': {reason}")]
    InvalidEnvironment { key: String, reason: &'static str },

    /// Temporary working directory could not be created
    #[error("Failed to create isolated filesystem: {0}")]
    IsolatedFilesystem(#[source] std::io::Error),

    /// Process working directory could not be determined
    #[error("Failed to determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    /// Entry point failed and the caller asked for strict propagation
    #[error("Entry point failed: {0}")]
    Uncaught(Failure),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::FileNotFound("/tmp/missing.toml".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration file not found: /tmp/missing.toml"
        );
    }

    #[test]
    fn test_invalid_environment_display() {
        let err = HarnessError::InvalidEnvironment {
            key: "A=B".to_string(),
            reason: "name contains '='",
        };
        assert!(err.to_string().contains("'A=B'"));
        assert!(err.to_string().contains("contains '='"));
    }

    #[test]
    fn test_error_conversion() {
        let config_err = ConfigError::FileNotFound("x".to_string());
        let app_err: AppError = config_err.into();
        assert!(matches!(app_err, AppError::Config(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let app_err: AppError = io_err.into();
        assert!(app_err.to_string().starts_with("IO error"));
    }
}
