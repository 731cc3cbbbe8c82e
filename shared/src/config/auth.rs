//! Token signing configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;

/// Environment variable holding the signing secret for the simple loader
pub const SECRET_ENV_VAR: &str = "APP_SECRET";

/// Configuration for the credential signer
///
/// There is intentionally no built-in fallback secret: a process without a
/// configured secret must refuse to start.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Secret used to sign credentials, never written back out
    #[serde(default, skip_serializing)]
    pub secret: Option<String>,
}

impl TokenConfig {
    /// Create a token configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
        }
    }

    /// Create from the `APP_SECRET` environment variable
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            secret: std::env::var(SECRET_ENV_VAR).ok(),
        }
    }

    /// Returns the configured secret bytes.
    ///
    /// An absent secret is reported here; an empty one is rejected later when
    /// the secret holder is built.
    pub fn require_secret(&self) -> Result<&[u8], ConfigurationError> {
        self.secret
            .as_deref()
            .map(str::as_bytes)
            .ok_or_else(|| ConfigurationError::MissingSecret {
                source_name: String::from("token.secret"),
            })
    }
}

// Keeps the secret out of logs and panic messages.
impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
