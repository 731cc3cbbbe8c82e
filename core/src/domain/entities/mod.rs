//! Domain entities representing core business objects.

pub mod token;
pub mod user;


// Re-export commonly used types
pub use token::{Claims, TokenHeader, TOKEN_ALGORITHM, TOKEN_TTL_SECONDS, TOKEN_TYPE};
pub use user::{PublicUser, User};
