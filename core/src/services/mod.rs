//! Business services containing the credential logic.

pub mod auth;
pub mod secret;
pub mod token;

// Re-export commonly used types
pub use auth::{bearer_token, Authenticator};
pub use secret::SecretKey;
pub use token::{Clock, FixedClock, SystemClock, TokenService};
