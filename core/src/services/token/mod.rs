//! Token service module for signed credentials
//!
//! This module handles:
//! - Credential minting for a subject identifier
//! - Credential verification with constant-time signature comparison
//! - Segment encoding shared by both directions
//! - Clock abstraction for issued-at timestamps

mod clock;
mod encoding;
mod service;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use service::TokenService;
