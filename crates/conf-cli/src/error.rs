//! Error types for conf-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error loading a configuration
    #[error(transparent)]
    Config(#[from] conf_tree::Error),

    /// A value could not be read as the requested type
    #[error("{key}: {source}")]
    Value {
        key: String,
        #[source]
        source: conf_tree::Error,
    },

    /// Error rendering a value as JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    pub fn value(key: &str, source: conf_tree::Error) -> Self {
        Self::Value {
            key: key.to_string(),
            source,
        }
    }
}
