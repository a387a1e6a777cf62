use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error types for the dnsvigil application.
///
/// Covers configuration loading and bootstrap; service-level failures live
/// in [`crate::services::dns_status::DnsStatusError`].
#[derive(Error, Debug)]
pub enum DnsvigilError {
    /// I/O operation error with path context
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where the I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of the TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for dnsvigil operations.
pub type Result<T> = std::result::Result<T, DnsvigilError>;

impl DnsvigilError {
    /// Creates a TOML parsing error with optional file path context.
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        DnsvigilError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }
}
