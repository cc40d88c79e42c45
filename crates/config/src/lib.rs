//! Configuration resolution for Slim Console.
//!
//! This crate provides the `Config` type and the resolver that builds it from
//! environment variables or a configuration file in the project root.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigFormat, ConfigResolver, ConfigSource, EnvSource, NOT_A_MAPPING,
    ProcessEnv, SUPPORTED_FORMATS, from_env,
};
pub use types::{Config, ConfigKey, ConfigMap};
