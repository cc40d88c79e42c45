//! Configuration file formats and their parsers.
//!
//! Responsibilities:
//! - Register the supported file formats in priority order.
//! - Decode file contents for each format into a flat `ConfigMap`.
//! - Reject contents that decode to anything other than a flat mapping.
//!
//! Does NOT handle:
//! - Locating files on disk or choosing between formats (see resolver.rs).
//! - Applying defaults (see `Config::from_map`).
//!
//! Invariants:
//! - `SUPPORTED_FORMATS` order is the resolution priority order.
//! - Blank contents decode to an empty mapping for every format.
//! - Every parse failure is `ConfigError::InvalidFormat`.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;
use crate::constants::CONFIG_FILENAME;
use crate::types::ConfigMap;

/// Reason reported when a file decodes to something other than a mapping.
pub const NOT_A_MAPPING: &str = "configuration should be a mapping of keys to values";

/// Registered formats, highest priority first.
pub const SUPPORTED_FORMATS: [ConfigFormat; 3] =
    [ConfigFormat::Toml, ConfigFormat::Json, ConfigFormat::Yaml];

/// A declarative configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// File extension, without the leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }

    /// Name of the configuration file for this format.
    pub fn file_name(self) -> String {
        format!("{CONFIG_FILENAME}.{}", self.extension())
    }

    /// Parse raw file contents into a flat mapping.
    ///
    /// Scalars are kept as their string form; only an explicit null counts as
    /// an omitted key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFormat` if the contents cannot be decoded,
    /// if the top-level value is not a mapping, or if a value is itself a
    /// mapping or sequence.
    pub fn parse(self, contents: &str) -> Result<ConfigMap, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(ConfigMap::new());
        }

        match self {
            ConfigFormat::Toml => self.parse_toml(contents),
            ConfigFormat::Json => self.parse_json(contents),
            ConfigFormat::Yaml => self.parse_yaml(contents),
        }
    }

    fn parse_toml(self, contents: &str) -> Result<ConfigMap, ConfigError> {
        use toml::Value;

        let table: toml::Table = toml::from_str(contents).map_err(|e| self.decode_error(e))?;

        let mut map = ConfigMap::new();
        for (key, value) in table {
            let value = match value {
                Value::String(s) => s,
                Value::Integer(i) => i.to_string(),
                Value::Float(f) => float_to_string(f),
                Value::Boolean(b) => b.to_string(),
                Value::Datetime(dt) => dt.to_string(),
                Value::Array(_) | Value::Table(_) => return Err(self.not_a_scalar(&key)),
            };
            map.insert(key, value);
        }
        Ok(map)
    }

    fn parse_json(self, contents: &str) -> Result<ConfigMap, ConfigError> {
        use serde_json::Value;

        let value: Value = serde_json::from_str(contents).map_err(|e| self.decode_error(e))?;
        let Value::Object(object) = value else {
            return Err(ConfigError::invalid_format(self, NOT_A_MAPPING));
        };

        let mut map = ConfigMap::new();
        for (key, value) in object {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => return Err(self.not_a_scalar(&key)),
            };
            map.insert(key, value);
        }
        Ok(map)
    }

    fn parse_yaml(self, contents: &str) -> Result<ConfigMap, ConfigError> {
        use serde_yaml::Value;

        let value: Value = serde_yaml::from_str(contents).map_err(|e| self.decode_error(e))?;
        let Value::Mapping(mapping) = value else {
            return Err(ConfigError::invalid_format(self, NOT_A_MAPPING));
        };

        let mut map = ConfigMap::new();
        for (key, value) in mapping {
            let Value::String(key) = key else {
                return Err(ConfigError::invalid_format(
                    self,
                    format!("keys should be strings, found {key:?}"),
                ));
            };
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => match n.as_f64() {
                    Some(f) if n.is_f64() => float_to_string(f),
                    _ => n.to_string(),
                },
                Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
                    return Err(self.not_a_scalar(&key));
                }
            };
            map.insert(key, value);
        }
        Ok(map)
    }

    fn decode_error(self, message: impl fmt::Display) -> ConfigError {
        ConfigError::invalid_format(self, format!("failed to decode contents: {message}"))
    }

    fn not_a_scalar(self, key: &str) -> ConfigError {
        ConfigError::invalid_format(self, format!("value for `{key}` should be a string"))
    }
}

/// `3.0`, `0.5`, `NaN`, `inf`, `-inf`.
fn float_to_string(f: f64) -> String {
    format!("{f:?}")
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(s.to_string())),
        }
    }
}
