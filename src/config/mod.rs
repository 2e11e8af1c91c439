//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONSTRUCTBOT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use constructbot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod features;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig, MAX_TIMEOUT_SECS};

use serde::Deserialize;
use std::time::Duration;

/// Headroom kept between the end of the fallback chain and the HTTP request timeout.
pub const REPLY_DEADLINE_MARGIN: Duration = Duration::from_secs(1);

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has defaults; only an AI backend must be supplied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (Gemini, local model)
    #[serde(default)]
    pub ai: AiConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONSTRUCTBOT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CONSTRUCTBOT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONSTRUCTBOT__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONSTRUCTBOT")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Checks each section, then that a single source call ends before the
    /// HTTP request that triggered it, leaving room for the reply deadline.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        if self.ai.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::InvalidTimeout(
                "ai.timeout_secs must be less than server.request_timeout_secs",
            ));
        }
        Ok(())
    }

    /// Overall budget for the fallback chain.
    ///
    /// Ends before the request timeout, so a chain of slow sources still
    /// answers with the exhaustion message instead of a bare 408.
    pub fn reply_deadline(&self) -> Duration {
        self.server
            .request_timeout()
            .saturating_sub(REPLY_DEADLINE_MARGIN)
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
