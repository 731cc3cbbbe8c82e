//! Holder for the credential signing secret

use std::sync::Arc;

use tk_shared::config::TokenConfig;

use crate::errors::ConfigurationError;

/// Immutable signing secret shared by every codec in the process
///
/// The bytes are opaque and need not be UTF-8. Cloning shares the same
/// allocation.
#[derive(Clone)]
pub struct SecretKey {
    bytes: Arc<[u8]>,
}

impl SecretKey {
    /// Creates a secret holder, refusing an empty secret
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, ConfigurationError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigurationError::EmptySecret);
        }
        Ok(Self {
            bytes: Arc::from(secret),
        })
    }

    /// Creates a secret holder from loaded configuration
    pub fn from_config(config: &TokenConfig) -> Result<Self, ConfigurationError> {
        Self::new(config.require_secret()?)
    }

    /// Returns the raw secret bytes
    pub fn get(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
