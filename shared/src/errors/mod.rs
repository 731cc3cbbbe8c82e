//! Shared error types

use thiserror::Error;

/// Raised when the process cannot be configured safely.
///
/// Every variant is fatal: the caller is expected to abort initialisation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Secret key must not be empty")]
    EmptySecret,

    #[error("Secret key is not configured: {source_name}")]
    MissingSecret { source_name: String },

    #[error("Failed to load configuration: {message}")]
    Load { message: String },
}

impl From<config::ConfigError> for ConfigurationError {
    fn from(err: config::ConfigError) -> Self {
        ConfigurationError::Load {
            message: err.to_string(),
        }
    }
}
