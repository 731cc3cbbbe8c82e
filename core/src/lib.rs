//! # TokenKit Core
//!
//! Stateless issuance and verification of signed, time-bound credentials.
//! This crate contains the credential value objects, the signing secret
//! holder, the token codec, request authentication helpers, and the error
//! types shared by them.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
