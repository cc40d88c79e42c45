//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Build configuration from `SLIM_CONSOLE_*` environment variables.
//! - Parse `slim-console.config.{toml,json,yaml}` files.
//! - Provide `ConfigResolver`, which picks exactly one of those sources.
//!
//! Does NOT handle:
//! - Locating the project root directory (the caller supplies it).
//! - Reporting errors to the user (see `crates/cli`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over configuration files.
//! - Configuration files are searched in `SUPPORTED_FORMATS` order.
//! - Sources are never merged.

mod env;
mod error;
mod format;
mod resolver;

#[cfg(test)]
mod tests;

pub use env::{EnvSource, ProcessEnv, from_env};
pub use error::ConfigError;
pub use format::{ConfigFormat, NOT_A_MAPPING, SUPPORTED_FORMATS};
pub use resolver::{ConfigResolver, ConfigSource};
