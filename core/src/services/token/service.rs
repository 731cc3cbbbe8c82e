//! Main token service implementation

use serde_json::Value;

use crate::domain::entities::token::{Claims, TokenHeader, TOKEN_ALGORITHM};
use crate::errors::TokenError;
use crate::services::secret::SecretKey;

use super::clock::{Clock, SystemClock};
use super::encoding::{decode_segment, encode_segment, sign, signatures_match};

/// Separator between credential segments
const SEGMENT_SEPARATOR: char = '.';

/// Stateless codec for signed, time-bound credentials
///
/// Holds nothing but the immutable secret and a clock, so a single instance
/// can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct TokenService<C: Clock = SystemClock> {
    secret: SecretKey,
    clock: C,
}

impl TokenService<SystemClock> {
    /// Creates a token service reading the wall clock
    pub fn new(secret: SecretKey) -> Self {
        Self::with_clock(secret, SystemClock)
    }
}

impl<C: Clock> TokenService<C> {
    /// Creates a token service with an explicit time source
    pub fn with_clock(secret: SecretKey, clock: C) -> Self {
        Self { secret, clock }
    }

    /// Mints a credential asserting `subject_id`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - `header.payload.signature`, valid for one hour
    /// * `Err(TokenError::CreationFailed)` - serialization or signing failed
    pub fn mint(&self, subject_id: i64) -> Result<String, TokenError> {
        let header = serde_json::to_vec(&TokenHeader::default())
            .map_err(TokenError::creation_failed)?;
        let claims = Claims::new(subject_id, self.clock.now())
            .ok_or_else(|| TokenError::creation_failed("issued-at out of range"))?;
        let payload = serde_json::to_vec(&claims).map_err(TokenError::creation_failed)?;

        let signing_input = format!(
            "{}{}{}",
            encode_segment(&header),
            SEGMENT_SEPARATOR,
            encode_segment(&payload)
        );
        let signature =
            sign(self.secret.get(), &signing_input).map_err(TokenError::creation_failed)?;

        tracing::debug!(subject_id, expires_at = claims.exp, "Minted credential");
        Ok(format!("{}{}{}", signing_input, SEGMENT_SEPARATOR, signature))
    }

    /// Verifies a credential and returns the subject it asserts
    ///
    /// Every failure yields `None`; callers cannot tell a malformed
    /// credential from a forged one. `exp` is not checked here, see
    /// [`TokenService::verify_claims`].
    pub fn verify(&self, token: &str) -> Option<i64> {
        self.verified_payload(token)
            .and_then(|payload| payload.get("sub").and_then(Value::as_i64))
    }

    /// Verifies a credential and returns its full claims
    ///
    /// Same checks as [`TokenService::verify`], additionally requiring `iat`
    /// and `exp` so the caller can apply an expiry policy with
    /// [`Claims::is_expired_at`].
    pub fn verify_claims(&self, token: &str) -> Option<Claims> {
        self.verified_payload(token)
            .and_then(|payload| serde_json::from_value(payload).ok())
    }

    /// Current time according to the service clock
    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    fn verified_payload(&self, token: &str) -> Option<Value> {
        let payload = self.check(token);
        if payload.is_none() {
            tracing::debug!("Rejected credential");
        }
        payload
    }

    fn check(&self, token: &str) -> Option<Value> {
        let mut parts = token.split(SEGMENT_SEPARATOR);
        let (header_segment, payload_segment, signature_segment) =
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(h), Some(p), Some(s), None) => (h, p, s),
                _ => return None,
            };
        if header_segment.is_empty() || payload_segment.is_empty() || signature_segment.is_empty() {
            return None;
        }

        let header = parse_segment(header_segment)?;
        if header.get("alg").and_then(Value::as_str) != Some(TOKEN_ALGORITHM) {
            return None;
        }

        let payload = parse_segment(payload_segment)?;
        payload.get("sub")?.as_i64()?;

        // Signed over the segments as received, never re-encoded.
        let signing_input = format!("{}{}{}", header_segment, SEGMENT_SEPARATOR, payload_segment);
        let expected = sign(self.secret.get(), &signing_input).ok()?;

        signatures_match(&expected, signature_segment).then_some(payload)
    }
}

fn parse_segment(segment: &str) -> Option<Value> {
    let bytes = decode_segment(segment)?;
    serde_json::from_slice(&bytes).ok()
}
