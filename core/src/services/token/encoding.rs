//! Segment encoding for credentials
//!
//! Header and payload are written with the standard alphabet, padding
//! included, which is how every credential already in circulation looks.
//! The signature is written URL-safe without padding. Reading accepts
//! either alphabet and optional padding for header and payload.

use base64::{
    alphabet,
    engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Standard alphabet, padding optional, tolerant of non-zero trailing bits
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encodes a header or payload segment
pub(crate) fn encode_segment(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decodes a header or payload segment written in either alphabet
pub(crate) fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    let translated: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    LENIENT.decode(translated).ok()
}

/// Computes the URL-safe signature of `signing_input`
pub(crate) fn sign(secret: &[u8], signing_input: &str) -> Result<String, hmac::digest::InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(secret)?;
    mac.update(signing_input.as_bytes());
    Ok(general_purpose::URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
}

/// Compares two signatures without exiting at the first differing byte
///
/// The full-length scan is delegated to `constant_time_eq`, which folds
/// every byte pair into one accumulator behind an optimisation barrier.
/// Only a length mismatch returns early, and signature length is public.
pub(crate) fn signatures_match(expected: &str, provided: &str) -> bool {
    constant_time_eq(expected.as_bytes(), provided.as_bytes())
}
