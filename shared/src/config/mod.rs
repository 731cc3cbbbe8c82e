//! Configuration module
//!
//! - `auth` - Credential signing configuration
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod environment;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;

// Re-export commonly used types
pub use auth::TokenConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Prefix for environment variable overrides, e.g. `TOKENKIT__TOKEN__SECRET`
pub const ENV_PREFIX: &str = "TOKENKIT";

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Credential signing configuration
    #[serde(default)]
    pub token: TokenConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            token: TokenConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration for the environment named by `ENVIRONMENT`.
    ///
    /// Sources, later ones winning: environment defaults, the optional
    /// `config.<environment>.toml` file, then `TOKENKIT__*` variables.
    pub fn load() -> Result<Self, ConfigurationError> {
        dotenvy::dotenv().ok();
        Self::load_for(Environment::from_env())
    }

    /// Load configuration for an explicit environment
    pub fn load_for(environment: Environment) -> Result<Self, ConfigurationError> {
        let logging = LoggingConfig::for_environment(environment);

        let settings = config::Config::builder()
            .set_default("environment", environment.to_string())?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format.as_str())?
            .add_source(config::File::with_name(environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
