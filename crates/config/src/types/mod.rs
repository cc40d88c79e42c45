//! Configuration type definitions for Slim Console.
//!
//! Responsibilities:
//! - Define the fixed set of recognized configuration keys.
//! - Define the immutable `Config` produced by resolution.
//! - Provide the single construction path (`Config::from_map`) shared by every source.
//!
//! Does NOT handle:
//! - Reading environment variables or files (see `loader` module).
//! - Choosing between sources (see `loader::resolver`).
//!
//! Invariants:
//! - Every `ConfigKey` has a value in every `Config`.
//! - A `Config` has no mutating methods once constructed.

mod config;
mod key;

pub use config::{Config, ConfigMap};
pub use key::ConfigKey;
