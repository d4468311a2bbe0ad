//! # labref-config
//!
//! Layered configuration loading for labref using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Command-line overrides ([`ConfigOverrides`])
//! 2. Environment variables (`LABREF_*` prefix, `__` as separator)
//! 3. Project-level `labref.toml`, or an explicit `--config` file
//! 4. User-level `~/.config/labref/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LABREF_DATABASE__URL` -> `database.url`,
//! `LABREF_SOURCES__CAS_URL` -> `sources.cas_url`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use labref_config::LabrefConfig;
//!
//! let config = LabrefConfig::load_with_dotenv(None).expect("config");
//! config.validate().expect("connection string present");
//! println!("statements from {}", config.sources.hp_url);
//! ```

mod database;
mod error;
mod sources;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use sources::SourcesConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project-local config file.
pub const PROJECT_CONFIG_FILE: &str = "labref.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LabrefConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

/// Values supplied on the command line. `None` leaves the layered value as is.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database_url: Option<String>,
    pub auth_token: Option<String>,
    pub hp_url: Option<String>,
    pub pictograms_url: Option<String>,
    pub cas_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl LabrefConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `explicit` names a file that
    /// does not exist, or [`ConfigError::Figment`] if extraction fails.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(explicit)?.extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `explicit` does not exist.
    pub fn figment(explicit: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Explicit file, else project-local config
        match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed("LABREF_").split("__"));

        Ok(figment)
    }

    /// Apply command-line overrides on top of the layered values.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.database_url {
            self.database.url = url;
        }
        if let Some(token) = overrides.auth_token {
            self.database.auth_token = token;
        }
        if let Some(url) = overrides.hp_url {
            self.sources.hp_url = url;
        }
        if let Some(url) = overrides.pictograms_url {
            self.sources.pictograms_url = url;
        }
        if let Some(url) = overrides.cas_url {
            self.sources.cas_url = url;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.sources.timeout_secs = secs;
        }
        self
    }

    /// Check the values a load run cannot start without.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the connection string is
    /// missing, or [`ConfigError::InvalidValue`] for an empty statement URL
    /// or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.database.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
                hint: "pass --conn or set LABREF_DATABASE__URL".into(),
            });
        }
        if self.sources.hp_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "sources.hp_url".into(),
                reason: "the statement dataset has no built-in default".into(),
            });
        }
        if self.sources.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sources.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("labref").join("config.toml"))
    }
}
