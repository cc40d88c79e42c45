//! `slim-console paths`: list candidate configuration files.

use std::io::Write;

use anyhow::Result;
use slim_console_config::{ConfigResolver, EnvSource};

pub fn run<E: EnvSource>(resolver: &ConfigResolver<E>, out: &mut impl Write) -> Result<()> {
    for (format, path) in resolver.config_paths() {
        let status = if path.is_file() { "found" } else { "missing" };
        writeln!(out, "{format}\t{status}\t{}", path.display())?;
    }
    Ok(())
}
