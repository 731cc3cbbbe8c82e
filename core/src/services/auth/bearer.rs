//! Bearer scheme parsing

const BEARER_SCHEME: &str = "bearer";

/// Extracts the credential from an `Authorization` header value.
///
/// Accepts `Bearer <token>` with a case-insensitive scheme and surrounding
/// whitespace. Returns `None` for any other scheme or an empty credential.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let trimmed = header_value.trim();
    let (scheme, credential) = trimmed.split_once(char::is_whitespace)?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    let credential = credential.trim();
    (!credential.is_empty()).then_some(credential)
}
