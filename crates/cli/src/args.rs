//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve the project root directory from flags, environment, or the current directory.
//!
//! Non-responsibilities:
//! - Does not resolve configuration (see `commands` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "slim-console")]
#[command(about = "Slim Console - resolve and inspect project configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  slim-console config\n  slim-console --root-dir ./my-app config --output json\n  slim-console --formats json,yaml paths\n  SLIM_CONSOLE_PROJECT_NAME=App slim-console config\n"
)]
pub struct Cli {
    /// Project root directory containing slim-console.config.* (defaults to the current directory)
    #[arg(long, global = true, env = "SLIM_CONSOLE_ROOT_DIR", value_name = "DIR")]
    pub root_dir: Option<PathBuf>,

    /// Config file formats to search, highest priority first (e.g. toml,json,yaml)
    #[arg(long, global = true, value_delimiter = ',', value_name = "LIST")]
    pub formats: Option<Vec<String>>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved configuration and where it came from
    Config {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List candidate configuration files in priority order
    Paths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// The project root to resolve configuration in.
    ///
    /// # Errors
    ///
    /// Fails if the current directory cannot be determined or the root is not
    /// an existing directory.
    pub fn root_dir(&self) -> anyhow::Result<PathBuf> {
        let root = match &self.root_dir {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => std::env::current_dir()?,
        };

        anyhow::ensure!(
            root.is_dir(),
            "Project root {} is not a directory",
            root.display()
        );
        Ok(root)
    }
}
