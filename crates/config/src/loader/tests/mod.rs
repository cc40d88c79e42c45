//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test environment-based configuration and blank-value handling.
//! - Test per-format parsing and shape validation.
//! - Test resolver precedence, first-match-wins, and error propagation.
//!
//! Does NOT handle:
//! - Reading the real process environment (tested in env.rs with `serial_test`).
//! - Binary behaviour (tested in `crates/cli/tests`).
//!
//! Invariants:
//! - Tests inject a fake environment (`HashMap`) instead of mutating process state.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub mod format_tests;

/// Build a fake environment from key/value pairs.
pub fn fake_env(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Write `contents` to `<dir>/<name>`.
pub fn write_config(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}
