//! Error types for conf-tree

use std::path::PathBuf;

/// Result type for conf-tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or reading a configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Value is not set")]
    NotSet,

    #[error("Value is not {expected} (found {found})")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to parse {format} content: {message}")]
    Parse { format: String, message: String },

    #[error("Configuration root must be a map, found {found}")]
    NotAMap { found: &'static str },

    #[error("Unknown config format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config input: {0}")]
    Read(#[from] std::io::Error),
}

impl Error {
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { expected, found }
    }
}
