//! # stay-config
//!
//! Layered configuration loading for stay using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Command-line overrides passed to [`StayConfig::load_with_cli_overrides`]
//! 2. Environment variables (`STAY_*` prefix, `__` as separator)
//! 3. Project-level `.stay/config.toml`
//! 4. User-level `~/.config/stay/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STAY_API__BASE_URL` -> `api.base_url`,
//! `STAY_FORM__MINIMUM_NAME_CHARACTERS` -> `form.minimum_name_characters`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use stay_config::StayConfig;
//!
//! let config = StayConfig::load().expect("config");
//! println!("API: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod form;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use form::FormConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "STAY_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StayConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl StayConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` files are not read here; the binary loads them before calling.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_cli_overrides(&[])
    }

    /// Load configuration, then apply command-line overrides on top of every
    /// other source.
    ///
    /// Overrides use the environment variable spelling (`STAY_API__BASE_URL`).
    /// Keys without the `STAY_` prefix are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// validation.
    pub fn load_with_cli_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        let mut figment = Self::figment();
        for (key, value) in overrides {
            let Some(path) = env_key_to_path(key) else {
                continue;
            };
            let parsed: Value = value.parse().unwrap_or_else(|never| match never {});
            figment = figment.merge((path, parsed));
        }

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".stay/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check every section for values that would fail at use.
    ///
    /// # Errors
    ///
    /// Returns the first section's [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.form.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stay").join("config.toml"))
    }
}

/// `STAY_API__BASE_URL` -> `api.base_url`.
fn env_key_to_path(key: &str) -> Option<String> {
    let rest = key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase().replace("__", "."))
}
