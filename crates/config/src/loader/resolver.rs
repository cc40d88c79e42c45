//! Configuration resolver implementation.
//!
//! Responsibilities:
//! - Select exactly one configuration source: the environment, or the first
//!   existing configuration file in format priority order.
//! - Delegate a located file to its format parser.
//! - Report which source produced the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Decoding file contents (delegated to format.rs).
//! - Locating the project root directory (supplied by the caller).
//!
//! Invariants / Assumptions:
//! - Environment takes precedence over every configuration file; files are not
//!   touched when it wins.
//! - The first existing file wins. A parse or read failure of that file is
//!   returned as-is and never causes the next format to be tried.
//! - Sources are never merged.

use std::fmt;
use std::path::{Path, PathBuf};

use super::env::{EnvSource, ProcessEnv, from_env};
use super::error::ConfigError;
use super::format::{ConfigFormat, SUPPORTED_FORMATS};
use crate::types::Config;

/// Where a resolved configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built from `SLIM_CONSOLE_*` environment variables.
    Environment,
    /// Parsed from a configuration file.
    File { path: PathBuf, format: ConfigFormat },
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Environment => f.write_str("environment"),
            ConfigSource::File { path, format } => write!(f, "{} ({format})", path.display()),
        }
    }
}

/// Resolves the Slim Console configuration for a project root.
pub struct ConfigResolver<E = ProcessEnv> {
    root_dir: PathBuf,
    env: E,
    formats: Vec<ConfigFormat>,
}

impl ConfigResolver<ProcessEnv> {
    /// Create a resolver for `root_dir` reading the process environment.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            env: ProcessEnv,
            formats: SUPPORTED_FORMATS.to_vec(),
        }
    }
}

impl<E: EnvSource> ConfigResolver<E> {
    /// Replace the environment lookup (primarily for testing).
    pub fn with_env<F: EnvSource>(self, env: F) -> ConfigResolver<F> {
        ConfigResolver {
            root_dir: self.root_dir,
            env,
            formats: self.formats,
        }
    }

    /// Override the file formats to search, highest priority first.
    pub fn with_formats(mut self, formats: Vec<ConfigFormat>) -> Self {
        self.formats = formats;
        self
    }

    /// Candidate configuration file paths, highest priority first.
    pub fn config_paths(&self) -> Vec<(ConfigFormat, PathBuf)> {
        self.formats
            .iter()
            .map(|format| (*format, self.root_dir.join(format.file_name())))
            .collect()
    }

    /// Resolve the configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::CannotResolveConfig` if neither the environment nor any
    ///   configuration file provides a configuration.
    /// - `ConfigError::InvalidFormat` if the first existing file is malformed or
    ///   is not valid UTF-8.
    /// - `ConfigError::ConfigFileRead` if the first existing file cannot be read.
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        self.resolve_with_source().map(|(config, _)| config)
    }

    /// Resolve the configuration and report which source produced it.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigResolver::resolve`].
    pub fn resolve_with_source(&self) -> Result<(Config, ConfigSource), ConfigError> {
        match from_env(&self.env) {
            Ok(config) => {
                tracing::info!(source = "environment", "Resolved configuration");
                Ok((config, ConfigSource::Environment))
            }
            Err(ConfigError::MissingSource { var }) => {
                tracing::debug!(var, "Environment source not set, scanning config files");
                self.resolve_from_files()
            }
            Err(e) => Err(e),
        }
    }

    fn resolve_from_files(&self) -> Result<(Config, ConfigSource), ConfigError> {
        for (format, path) in self.config_paths() {
            if !path.is_file() {
                tracing::debug!(path = %path.display(), %format, "Config file not found");
                continue;
            }

            let config = parse_file(&path, format)?;
            tracing::info!(
                source = "file",
                path = %path.display(),
                %format,
                "Resolved configuration"
            );
            return Ok((config, ConfigSource::File { path, format }));
        }

        Err(ConfigError::CannotResolveConfig {
            root: self.root_dir.clone(),
            file_names: self.formats.iter().map(|f| f.file_name()).collect(),
        })
    }
}

/// Read and parse a single configuration file.
fn parse_file(path: &Path, format: ConfigFormat) -> Result<Config, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let map = String::from_utf8(bytes)
        .map_err(|e| {
            ConfigError::invalid_format(format, format!("contents are not valid UTF-8: {e}"))
        })
        .and_then(|contents| format.parse(&contents))
        .inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Config file is invalid");
        })?;

    Ok(Config::from_map(map))
}
