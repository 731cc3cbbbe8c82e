//! Domain layer containing value objects for credentials and users.

pub mod entities;

// Re-export commonly used domain types
pub use entities::{
    Claims, PublicUser, TokenHeader, User, TOKEN_ALGORITHM, TOKEN_TTL_SECONDS, TOKEN_TYPE,
};
