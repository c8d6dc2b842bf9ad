//! Structured error types for the certification CLI

use lib_certify::CertifyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// Engine rejected the operation; state is unchanged
    #[error(transparent)]
    Certify(#[from] CertifyError),

    #[error("No certification state at {path}; run `certify init` first")]
    StateNotInitialized { path: String },

    #[error("Certification state already exists at {path} (use --force to overwrite)")]
    StateExists { path: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for CliError {
    fn from(s: String) -> Self {
        CliError::Other(s)
    }
}

impl From<&str> for CliError {
    fn from(s: &str) -> Self {
        CliError::Other(s.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
