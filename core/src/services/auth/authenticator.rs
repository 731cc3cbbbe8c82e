//! Resolves request credentials to subject identifiers

use crate::errors::AuthError;
use crate::services::token::{Clock, SystemClock, TokenService};

use super::bearer::bearer_token;

/// Authenticates requests from their `Authorization` header
#[derive(Debug, Clone)]
pub struct Authenticator<C: Clock = SystemClock> {
    tokens: TokenService<C>,
}

impl<C: Clock> Authenticator<C> {
    pub fn new(tokens: TokenService<C>) -> Self {
        Self { tokens }
    }

    /// Resolves the subject identifier asserted by a request
    ///
    /// # Returns
    ///
    /// * `Ok(i64)` - The verified subject identifier
    /// * `Err(AuthError::MissingCredentials)` - No bearer credential present
    /// * `Err(AuthError::InvalidCredentials)` - The credential failed verification
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<i64, AuthError> {
        let token = authorization
            .and_then(bearer_token)
            .ok_or(AuthError::MissingCredentials)?;
        self.tokens.verify(token).ok_or(AuthError::InvalidCredentials)
    }

    /// Token service used for verification
    pub fn tokens(&self) -> &TokenService<C> {
        &self.tokens
    }
}
