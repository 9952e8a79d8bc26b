//! # sk-config
//!
//! Layered configuration loading for shopkeep using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SK_*` prefix, `__` as separator)
//! 2. Project-level `.shopkeep/config.toml`
//! 3. User-level `~/.config/shopkeep/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SK_DATABASE__PATH` -> `database.path`,
//! `SK_LOGS__POST_TYPE` -> `logs.post_type`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sk_config::SkConfig;
//!
//! let config = SkConfig::load().expect("config");
//! println!("store: {}", config.database.path);
//! ```

mod database;
mod error;
mod logs;

pub use database::{DatabaseConfig, is_valid_prefix};
pub use error::ConfigError;
pub use logs::LogsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".shopkeep/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SkConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

impl SkConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; the binary loads it before calling this.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be parsed and
    /// `ConfigError::InvalidValue` when a loaded value is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`SkConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SK_").split("__"))
    }

    /// Replace the database path, as the `--database` flag does.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database.path = path.into();
        self
    }

    /// Check every section for values the store adapter cannot use.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.logs.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("shopkeep").join("config.toml"))
    }
}
