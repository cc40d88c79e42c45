//! Recognized configuration keys.

use std::fmt;

use crate::constants::{
    DEFAULT_BOOTSTRAP_DIR, DEFAULT_COMMANDS_DIR, DEFAULT_COMMANDS_NAMESPACE, DEFAULT_INDEX_DIR,
    DEFAULT_INDEX_FILE, DEFAULT_PROJECT_NAME, DEFAULT_SOURCE_DIR, ENV_BOOTSTRAP_DIR,
    ENV_COMMANDS_DIR, ENV_COMMANDS_NAMESPACE, ENV_INDEX_DIR, ENV_INDEX_FILE, ENV_PROJECT_NAME,
    ENV_SOURCE_DIR,
};

/// A configuration key known ahead of time.
///
/// Ordering follows declaration order, which is also the order keys are
/// listed in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigKey {
    /// Project name.
    Name,
    /// Directory holding the application bootstrap files.
    BootstrapDir,
    /// Directory where console commands live.
    CommandsDir,
    /// Namespace console commands are declared in.
    CommandsNamespace,
    /// Public web root.
    IndexDir,
    /// Front controller inside `IndexDir`.
    IndexFile,
    /// Application source directory.
    SourceDir,
}

impl ConfigKey {
    /// Every recognized key, in declaration order.
    pub const ALL: [ConfigKey; 7] = [
        ConfigKey::Name,
        ConfigKey::BootstrapDir,
        ConfigKey::CommandsDir,
        ConfigKey::CommandsNamespace,
        ConfigKey::IndexDir,
        ConfigKey::IndexFile,
        ConfigKey::SourceDir,
    ];

    /// Key as written in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            ConfigKey::Name => "name",
            ConfigKey::BootstrapDir => "bootstrapDir",
            ConfigKey::CommandsDir => "commandsDir",
            ConfigKey::CommandsNamespace => "commandsNamespace",
            ConfigKey::IndexDir => "indexDir",
            ConfigKey::IndexFile => "indexFile",
            ConfigKey::SourceDir => "sourceDir",
        }
    }

    /// Environment variable that supplies this key.
    pub const fn env_var(self) -> &'static str {
        match self {
            ConfigKey::Name => ENV_PROJECT_NAME,
            ConfigKey::BootstrapDir => ENV_BOOTSTRAP_DIR,
            ConfigKey::CommandsDir => ENV_COMMANDS_DIR,
            ConfigKey::CommandsNamespace => ENV_COMMANDS_NAMESPACE,
            ConfigKey::IndexDir => ENV_INDEX_DIR,
            ConfigKey::IndexFile => ENV_INDEX_FILE,
            ConfigKey::SourceDir => ENV_SOURCE_DIR,
        }
    }

    /// Value used when a source omits this key.
    pub const fn default_value(self) -> &'static str {
        match self {
            ConfigKey::Name => DEFAULT_PROJECT_NAME,
            ConfigKey::BootstrapDir => DEFAULT_BOOTSTRAP_DIR,
            ConfigKey::CommandsDir => DEFAULT_COMMANDS_DIR,
            ConfigKey::CommandsNamespace => DEFAULT_COMMANDS_NAMESPACE,
            ConfigKey::IndexDir => DEFAULT_INDEX_DIR,
            ConfigKey::IndexFile => DEFAULT_INDEX_FILE,
            ConfigKey::SourceDir => DEFAULT_SOURCE_DIR,
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
