//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the `ConfigResolver` from global CLI options.
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Choosing a configuration source (see `slim_console_config::ConfigResolver`).
//!
//! Invariants:
//! - Commands write their output to stdout; diagnostics go to stderr via tracing.

use anyhow::{Context, Result};
use slim_console_config::{ConfigFormat, ConfigResolver};

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let resolver = build_resolver(&cli)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Config { output } => commands::config::run(&resolver, output, &mut stdout),
        Commands::Paths => commands::paths::run(&resolver, &mut stdout),
    }
}

fn build_resolver(cli: &Cli) -> Result<ConfigResolver> {
    let root_dir = cli.root_dir()?;
    tracing::debug!(root = %root_dir.display(), "Resolving configuration");
    let mut resolver = ConfigResolver::new(root_dir);

    if let Some(names) = &cli.formats {
        let formats = names
            .iter()
            .map(|name| name.parse::<ConfigFormat>())
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to parse --formats")?;
        resolver = resolver.with_formats(formats);
    }

    Ok(resolver)
}
