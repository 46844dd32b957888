use std::{fmt, io, path::Path};

use thiserror::Error;

use crate::services::admin::AdminError;

/// Errors surfaced by the ganeshactl tooling.
///
/// Bus-level failures are carried through as [`AdminError`] so callers can
/// tell a transport fault apart from a bad configuration file.
#[derive(Error, Debug)]
pub enum CtlError {
    /// Configuration is invalid or could not be located
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing failed
    #[error("{0}")]
    TomlParse(String),

    /// A statistics dump file contained a line that could not be parsed
    #[error("malformed stats line {line}: {details}")]
    StatsParse {
        /// One-based line number within the dump file
        line: usize,
        /// What was wrong with the line
        details: String,
    },

    /// The administrative D-Bus call failed at the transport level
    #[error(transparent)]
    Admin(#[from] AdminError),
}

/// Result alias for ganeshactl operations.
pub type Result<T> = std::result::Result<T, CtlError>;

impl CtlError {
    /// Creates a TOML parsing error with optional file path context.
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                CtlError::TomlParse(format!(
                    "Failed to parse TOML at {:?}: {}",
                    clean_path, error
                ))
            }
            None => CtlError::TomlParse(format!("Failed to parse TOML: {}", error)),
        }
    }
}
