//! Application settings.
//!
//! Settings come from an optional `config.toml` and may be overridden by the
//! `DATABASE_URL` and `DISH_DIARY_NAMESPACE` environment variables (a `.env` file
//! is honoured by the binary through `dotenvy`). Every field has a default, so a
//! missing config file is not an error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default SQLite location used when neither the file nor the environment sets one
pub const DEFAULT_DATABASE_URL: &str = "sqlite://dish_diary.sqlite?mode=rwc";

/// Namespace the original on-device store used; kept so exported data lines up
pub const DEFAULT_NAMESPACE: &str = "PrivateDishesV4";

/// Top-level settings parsed from config.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// SeaORM connection string for the key/value table
    pub database_url: String,
    /// Namespace all three collections are stored under
    pub namespace: String,
    /// Categories returned when nothing has been stored yet
    pub default_categories: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            default_categories: vec!["荤菜".to_string(), "素菜".to_string()],
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    /// Returns `Error::Config` if the TOML is malformed or a field has the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config.toml: {e}"),
        })
    }

    /// Loads settings from a TOML file, falling back to defaults if the file is absent.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            debug!("No config file at {:?}, using defaults", path_ref);
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path_ref)?;
        let settings = Self::from_toml_str(&contents)?;
        info!("Loaded settings from {:?}", path_ref);
        Ok(settings)
    }

    /// Applies `DATABASE_URL` and `DISH_DIARY_NAMESPACE` overrides from the environment.
    ///
    /// # Errors
    /// Returns `Error::EnvVar` if a variable is set but not valid unicode.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(url) = read_env("DATABASE_URL")? {
            self.database_url = url;
        }
        if let Some(namespace) = read_env("DISH_DIARY_NAMESPACE")? {
            self.namespace = namespace;
        }
        Ok(self)
    }
}

fn read_env(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Loads settings from the default location (./config.toml) plus environment overrides.
///
/// # Errors
/// Returns an error if config.toml exists but is invalid, or an override is not unicode.
pub fn load_default_settings() -> Result<Settings> {
    Settings::load("config.toml")?.with_env_overrides()
}
