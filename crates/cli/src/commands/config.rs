//! `slim-console config`: show the resolved configuration.

use std::io::Write;

use anyhow::Result;
use slim_console_config::{ConfigResolver, EnvSource};

use crate::args::OutputFormat;

pub fn run<E: EnvSource>(
    resolver: &ConfigResolver<E>,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let (config, source) = resolver.resolve_with_source()?;

    match output {
        OutputFormat::Text => {
            writeln!(out, "source: {source}")?;
            for (key, value) in config.iter() {
                writeln!(out, "{key} = {value}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &config)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
