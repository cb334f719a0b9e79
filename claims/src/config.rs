//! Application configuration.
//!
//! A static WASM bundle has no process environment at runtime, so values are
//! baked in at compile time through `option_env!`. Parsing goes through a
//! lookup closure so tests can feed arbitrary maps.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

const DEFAULT_APP_NAME: &str = "Base Claim";
const DEFAULT_LOGO_PATH: &str = "/vite.svg";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

pub const APP_NAME_KEY: &str = "BASE_CLAIM_APP_NAME";
pub const LOGO_PATH_KEY: &str = "BASE_CLAIM_LOGO_PATH";
pub const LOG_LEVEL_KEY: &str = "BASE_CLAIM_LOG";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid log level for {key}: {value}")]
    InvalidLogLevel { key: &'static str, value: String },
}

/// Settings shared by the wallet session and the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Name embedded in the sign-in challenge and shown as the page title.
    pub app_name: String,
    /// Logo path relative to the page origin.
    pub logo_path: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_owned(),
            logo_path: DEFAULT_LOGO_PATH.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] if the log level does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let log_level = match get(LOG_LEVEL_KEY) {
            Some(value) => log::Level::from_str(&value)
                .map_err(|_| ConfigError::InvalidLogLevel { key: LOG_LEVEL_KEY, value })?,
            None => defaults.log_level,
        };

        Ok(Self {
            app_name: get(APP_NAME_KEY).unwrap_or(defaults.app_name),
            logo_path: get(LOGO_PATH_KEY).unwrap_or(defaults.logo_path),
            log_level,
        })
    }

    /// Config from variables captured when the bundle was compiled.
    ///
    /// Falls back to defaults when a value is malformed; the logger is not
    /// installed yet at this point, so the error is returned alongside.
    #[must_use]
    pub fn from_build_env() -> (Self, Option<ConfigError>) {
        let lookup = |key: &str| {
            match key {
                APP_NAME_KEY => option_env!("BASE_CLAIM_APP_NAME"),
                LOGO_PATH_KEY => option_env!("BASE_CLAIM_LOGO_PATH"),
                LOG_LEVEL_KEY => option_env!("BASE_CLAIM_LOG"),
                _ => None,
            }
            .map(str::to_owned)
        };
        match Self::from_lookup(lookup) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Challenge text the wallet signs at sign-in.
    #[must_use]
    pub fn sign_in_message(&self, now_ms: u64) -> String {
        format!("Sign in to {} at {now_ms}", self.app_name)
    }
}
