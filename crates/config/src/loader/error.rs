//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every configuration resolution failure.
//! - Separate "source not present" from "source present but broken" from
//!   "no source at all".
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see `crates/cli`).
//!
//! Invariants:
//! - `MissingSource` is an internal fallback signal; the resolver never returns it.
//! - `InvalidFormat` carries the decoder message or shape description.
//! - `CannotResolveConfig` names the file names that were searched.
//! - A found file that cannot be read is `ConfigFileRead`; one that is not
//!   valid UTF-8 is `InvalidFormat`.

use std::path::PathBuf;
use thiserror::Error;

use super::format::ConfigFormat;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The environment does not provide a configuration.
    #[error("Missing required environment variable: {var}")]
    MissingSource { var: &'static str },

    /// A configuration file was found but its contents are unusable.
    #[error("Invalid Slim Console configuration ({format}): {reason}")]
    InvalidFormat { format: ConfigFormat, reason: String },

    /// Neither the environment nor any configuration file provided a configuration.
    #[error(
        "Unable to resolve Slim Console configuration in {root}. Set SLIM_CONSOLE_PROJECT_NAME or create one of: {}",
        .file_names.join(", ")
    )]
    CannotResolveConfig {
        root: PathBuf,
        /// Configuration file names searched, highest priority first.
        file_names: Vec<String>,
    },

    /// A format identifier that is not registered.
    #[error("Invalid configuration format `{0}`")]
    UnsupportedFormat(String),

    /// A configuration file exists but could not be read.
    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub(crate) fn invalid_format(format: ConfigFormat, reason: impl Into<String>) -> Self {
        ConfigError::InvalidFormat {
            format,
            reason: reason.into(),
        }
    }
}
