//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PROMETHEE_CLUSTER_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use promethee_cluster::config::ClusterConfig;
//!
//! let config = ClusterConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init_tracing().expect("Failed to initialise tracing");
//!
//! let engine = config.clustering.engine();
//! ```

mod clustering;
mod error;
mod logging;

pub use clustering::{ClusteringSettings, MAX_ITERATIONS_LIMIT};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root configuration
///
/// Every section has defaults, so an empty environment yields a valid
/// configuration. Load using [`ClusterConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ClusterConfig {
    /// Engine settings (iteration cap, seed, PrometheeTri options)
    #[serde(default)]
    pub clustering: ClusteringSettings,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClusterConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROMETHEE_CLUSTER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PROMETHEE_CLUSTER__CLUSTERING__MAX_ITERATIONS=50` -> `clustering.max_iterations = 50`
    /// - `PROMETHEE_CLUSTER__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PROMETHEE_CLUSTER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.clustering.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
