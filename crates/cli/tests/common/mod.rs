//! Shared test utilities for slim-console integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that clears `SLIM_CONSOLE_*` variables.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.

use assert_cmd::Command;
use slim_console_config::ConfigKey;

/// Returns a hermetic `slim-console` command for integration testing.
///
/// Every recognized `SLIM_CONSOLE_*` variable is removed so the host
/// environment cannot select the environment source.
pub fn slim_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("slim-console");

    for key in ConfigKey::ALL {
        cmd.env_remove(key.env_var());
    }
    cmd.env_remove("SLIM_CONSOLE_ROOT_DIR").env_remove("RUST_LOG");

    cmd
}
