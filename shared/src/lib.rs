//! Shared configuration and error types for TokenKit
//!
//! This crate provides functionality used by every TokenKit crate:
//! - Configuration types and layered loading
//! - The configuration error raised when startup settings are unusable

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LogFormat, LoggingConfig, TokenConfig};
pub use errors::ConfigurationError;
