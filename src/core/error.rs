//! Error types and error handling for codepack.
//!
//! Walk-level failures (a directory that cannot be listed, a file that
//! cannot be read as UTF-8) are recoverable: the walker logs them,
//! counts them and moves on. Everything else aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for codepack operations
pub type Result<T> = std::result::Result<T, ConsolidateError>;

/// Main error type for codepack
#[derive(Error, Debug)]
pub enum ConsolidateError {
    #[error("Error accessing directory {path:?}: {message}")]
    DirectoryAccess { path: PathBuf, message: String },

    #[error("Error reading file {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output file {path:?}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Split failed: {0}")]
    Split(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ConsolidateError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if the walk can continue past this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConsolidateError::DirectoryAccess { .. } | ConsolidateError::ReadFailed { .. }
        )
    }

    /// Check if this is a bad input error (invalid root or config)
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            ConsolidateError::InvalidPath(_)
                | ConsolidateError::ConfigError(_)
                | ConsolidateError::TomlError(_)
        )
    }
}
