//! Error types for credential issuance and request authentication

use thiserror::Error;

/// Token issuance errors
///
/// Verification never produces one of these; a rejected credential is
/// reported as an absent subject instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token creation failed: {message}")]
    CreationFailed { message: String },
}

impl TokenError {
    /// Wraps any lower-level failure raised while minting
    pub fn creation_failed(cause: impl std::fmt::Display) -> Self {
        TokenError::CreationFailed {
            message: cause.to_string(),
        }
    }
}

/// Authentication errors surfaced to the HTTP layer
///
/// `InvalidCredentials` deliberately covers every verification failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing credentials")]
    MissingCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,
}
