//! The resolved `Config` and its construction path.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::key::ConfigKey;

/// Flat key/value mapping produced by every configuration source before
/// normalization. Keys are file keys (e.g. `commandsDir`).
pub type ConfigMap = BTreeMap<String, String>;

/// Resolved Slim Console configuration.
///
/// Built exactly once per invocation, either from the environment or from a
/// parsed configuration file. Every recognized key always has a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    values: BTreeMap<ConfigKey, String>,
}

impl Config {
    /// Build a config from a flat mapping, filling omitted keys with defaults.
    ///
    /// Unrecognized keys are ignored.
    pub fn from_map(mut map: ConfigMap) -> Self {
        let values = ConfigKey::ALL
            .into_iter()
            .map(|key| {
                let value = map
                    .remove(key.as_str())
                    .unwrap_or_else(|| key.default_value().to_string());
                (key, value)
            })
            .collect();

        for unknown in map.keys() {
            tracing::warn!(key = %unknown, "Ignoring unrecognized configuration key");
        }

        Self { values }
    }

    /// Value for `key`. Always present.
    pub fn get(&self, key: ConfigKey) -> &str {
        self.values
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_value())
    }

    /// Iterate over all keys and values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ConfigKey, &str)> {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn name(&self) -> &str {
        self.get(ConfigKey::Name)
    }

    pub fn bootstrap_dir(&self) -> &str {
        self.get(ConfigKey::BootstrapDir)
    }

    pub fn commands_dir(&self) -> &str {
        self.get(ConfigKey::CommandsDir)
    }

    pub fn commands_namespace(&self) -> &str {
        self.get(ConfigKey::CommandsNamespace)
    }

    pub fn index_dir(&self) -> &str {
        self.get(ConfigKey::IndexDir)
    }

    pub fn index_file(&self) -> &str {
        self.get(ConfigKey::IndexFile)
    }

    pub fn source_dir(&self) -> &str {
        self.get(ConfigKey::SourceDir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_map(ConfigMap::new())
    }
}

impl Serialize for Config {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}
