//! # gostruct-config
//!
//! Layered configuration loading for gostruct using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GOSTRUCT_*` prefix, `__` as separator)
//! 2. Project-level `.gostruct.toml`
//! 3. User-level `~/.config/gostruct/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `GOSTRUCT_SCAN__RECURSIVE` -> `scan.recursive`,
//! `GOSTRUCT_OUTPUT__PRETTY` -> `output.pretty`, and so on.
//!
//! # Usage
//!
//! ```no_run
//! use gostruct_config::GostructConfig;
//!
//! let config = GostructConfig::load_with_dotenv().expect("config");
//! if config.scan.recursive {
//!     println!("walking sub-directories");
//! }
//! ```

mod error;
mod output;
mod scan;

pub use error::ConfigError;
pub use output::OutputConfig;
pub use scan::ScanConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".gostruct.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GostructConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl GostructConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables) and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    /// `ConfigError::Figment` for unreadable or mistyped sources,
    /// `ConfigError::InvalidValue` for values that fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the working
    /// directory or one of its parents, if there is one. A malformed `.env`
    /// is logged and skipped.
    ///
    /// # Errors
    /// As [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Err(error) if !error.not_found() => {
                tracing::debug!(%error, "skipping unreadable .env file");
            }
            _ => {}
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("GOSTRUCT_").split("__"))
    }

    /// # Errors
    /// `ConfigError::InvalidValue` for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scan.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gostruct").join("config.toml"))
    }
}
