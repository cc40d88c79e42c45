//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Abstract environment lookup behind `EnvSource` so tests can supply a fake.
//! - Build a `Config` from `SLIM_CONSOLE_*` variables when the primary one is set.
//!
//! Does NOT handle:
//! - Loading from configuration files (see format.rs and resolver.rs).
//! - Deciding whether the environment wins (see resolver.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - A missing primary variable yields `ConfigError::MissingSource`, never a partial config.

use std::collections::HashMap;

use super::error::ConfigError;
use crate::constants::ENV_PROJECT_NAME;
use crate::types::{Config, ConfigKey, ConfigMap};

/// Key/value lookup over environment variables.
pub trait EnvSource {
    /// Raw value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key`, treating empty and whitespace-only values as unset.
    /// Returns the trimmed value (leading/trailing whitespace removed) if present.
    fn var_or_none(&self, key: &str) -> Option<String> {
        let s = self.var(key)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Build a configuration from environment variables.
///
/// # Errors
///
/// Returns `ConfigError::MissingSource` if `SLIM_CONSOLE_PROJECT_NAME` is unset
/// or blank. Secondary variables are optional.
pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Result<Config, ConfigError> {
    if env.var_or_none(ENV_PROJECT_NAME).is_none() {
        return Err(ConfigError::MissingSource {
            var: ENV_PROJECT_NAME,
        });
    }

    let map: ConfigMap = ConfigKey::ALL
        .into_iter()
        .filter_map(|key| {
            env.var_or_none(key.env_var())
                .map(|value| (key.as_str().to_string(), value))
        })
        .collect();

    Ok(Config::from_map(map))
}
