//! Centralized constants for the Slim Console workspace.
//!
//! This module contains the file names, environment variable names and
//! default values shared by the loader and the CLI.

// =============================================================================
// Configuration File
// =============================================================================

/// Base name of the configuration file, without extension.
///
/// The resolver looks for `<root>/slim-console.config.<ext>` for every
/// registered format.
pub const CONFIG_FILENAME: &str = "slim-console.config";

// =============================================================================
// Environment Variables
// =============================================================================

/// Primary environment variable. Its presence selects the environment as the
/// configuration source.
pub const ENV_PROJECT_NAME: &str = "SLIM_CONSOLE_PROJECT_NAME";

pub const ENV_BOOTSTRAP_DIR: &str = "SLIM_CONSOLE_BOOTSTRAP_DIR";
pub const ENV_COMMANDS_DIR: &str = "SLIM_CONSOLE_COMMANDS_DIR";
pub const ENV_COMMANDS_NAMESPACE: &str = "SLIM_CONSOLE_COMMANDS_NAMESPACE";
pub const ENV_INDEX_DIR: &str = "SLIM_CONSOLE_INDEX_DIR";
pub const ENV_INDEX_FILE: &str = "SLIM_CONSOLE_INDEX_FILE";
pub const ENV_SOURCE_DIR: &str = "SLIM_CONSOLE_SOURCE_DIR";

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_PROJECT_NAME: &str = "Slim Application";
pub const DEFAULT_BOOTSTRAP_DIR: &str = "app";
pub const DEFAULT_COMMANDS_DIR: &str = "src/Application/Console/Commands";
pub const DEFAULT_COMMANDS_NAMESPACE: &str = "App\\Application\\Console\\Commands";
pub const DEFAULT_INDEX_DIR: &str = "public";
pub const DEFAULT_INDEX_FILE: &str = "index.php";
pub const DEFAULT_SOURCE_DIR: &str = "src";
