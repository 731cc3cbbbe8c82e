//! Request authentication built on the token service
//!
//! Extracts a bearer credential from an `Authorization` header value and
//! resolves it to a subject identifier. Turning the outcome into an HTTP
//! response is left to the web layer.

mod authenticator;
mod bearer;

pub use authenticator::Authenticator;
pub use bearer::bearer_token;
