//! Credential value objects.

use serde::{Deserialize, Serialize};

/// Signing algorithm advertised in every header
pub const TOKEN_ALGORITHM: &str = "HS256";

/// Token type advertised in every header
pub const TOKEN_TYPE: &str = "JWT";

/// Validity window of a credential (1 hour)
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// Header segment of a credential
///
/// Field order is part of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    /// Signing algorithm
    pub alg: String,

    /// Token type
    pub typ: String,
}

impl Default for TokenHeader {
    fn default() -> Self {
        Self {
            alg: TOKEN_ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

/// Payload segment of a credential
///
/// Serialized as `{"sub":..,"iat":..,"exp":..}` in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: i64,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a subject issued at `issued_at` (unix seconds)
    ///
    /// `exp` is always `iat + TOKEN_TTL_SECONDS`. Returns `None` when that
    /// does not fit in an `i64`.
    pub fn new(subject_id: i64, issued_at: i64) -> Option<Self> {
        Some(Self {
            sub: subject_id,
            iat: issued_at,
            exp: issued_at.checked_add(TOKEN_TTL_SECONDS)?,
        })
    }

    /// Checks whether the claims are expired at `now`
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    /// Seconds left before expiry at `now`, zero once expired
    pub fn remaining_at(&self, now: i64) -> i64 {
        self.exp.saturating_sub(now).max(0)
    }
}
