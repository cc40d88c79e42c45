//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 1 covers every failure that is not a configuration error.

use slim_console_config::ConfigError;

/// Structured exit codes for slim-console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - bad arguments, unreadable project root, output failure.
    GeneralError = 1,

    /// No configuration source found.
    ///
    /// Scripts should set SLIM_CONSOLE_PROJECT_NAME or create a config file.
    ConfigNotFound = 2,

    /// A configuration file exists but is unreadable or malformed.
    ///
    /// Scripts should fix the file; retrying will not help.
    InvalidConfig = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::CannotResolveConfig { .. } => ExitCode::ConfigNotFound,
            ConfigError::InvalidFormat { .. }
            | ConfigError::ConfigFileRead { .. }
            | ConfigError::UnsupportedFormat(_) => ExitCode::InvalidConfig,
            // Never escapes the resolver.
            ConfigError::MissingSource { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
