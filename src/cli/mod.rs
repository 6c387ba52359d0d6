//! Command-line interface for mcpsync.
//!
//! # Command Structure
//!
//! ```text
//! mcpsync [GLOBAL OPTIONS] <COMMAND> [COMMAND OPTIONS]
//! ```
//!
//! ## Global Options
//!
//! - `-v, --verbose`: Per-tool progress output and debug logging
//! - `--home <DIR>`: Home directory tool files are resolved against (env `MCPSYNC_HOME`)
//!
//! ## Commands
//!
//! - `generate`: Write `.mcpsync/mcp.json` to every tool's configuration file
//! - `import`: Merge one tool's configuration into `.mcpsync/mcp.json`
//! - `add`, `gitignore`, `init`, `status`, `validate`, `watch`: not implemented yet
//!
//! # Logging
//!
//! `RUST_LOG` takes precedence when set. Otherwise `--verbose` selects `debug` and the
//! default is `warn`. Log output goes to stderr; command output goes to stdout.

pub mod common;
pub mod generate;
pub mod import;
pub mod placeholder;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::SyncEnv;

/// Runtime settings derived from the global flags.
///
/// Built once by [`Cli::build_config`] and applied before the command runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is not set
    pub log_level: Option<String>,

    /// Home directory override (`--home` / `MCPSYNC_HOME`)
    pub home: Option<PathBuf>,
}

impl CliConfig {
    /// Create a configuration with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(self.log_level.as_deref().unwrap_or("warn"))
        });

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Keep one MCP server configuration in sync across coding tools.
#[derive(Parser, Debug)]
#[command(
    name = "mcpsync",
    about = "Sync MCP server configuration across Claude Code, Cursor, Cline, Copilot, Roo and Gemini CLI",
    version,
    long_about = "mcpsync keeps a single canonical MCP configuration in .mcpsync/mcp.json and \
                  generates each coding tool's configuration file from it."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Home directory that tool configuration paths are resolved against
    #[arg(long, global = true, env = "MCPSYNC_HOME", value_name = "DIR")]
    home: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate tool configurations from .mcpsync/mcp.json
    Generate(generate::GenerateCommand),

    /// Import a tool's MCP configuration into .mcpsync/mcp.json
    Import(import::ImportCommand),

    /// Add a server to .mcpsync/mcp.json (not implemented yet)
    Add,

    /// Add generated files to .gitignore (not implemented yet)
    Gitignore,

    /// Create .mcpsync/mcp.json (not implemented yet)
    Init,

    /// Show sync status (not implemented yet)
    Status,

    /// Validate .mcpsync/mcp.json (not implemented yet)
    Validate,

    /// Regenerate on change (not implemented yet)
    Watch,
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Commands::Generate(_) => "generate",
            Commands::Import(_) => "import",
            Commands::Add => "add",
            Commands::Gitignore => "gitignore",
            Commands::Init => "init",
            Commands::Status => "status",
            Commands::Validate => "validate",
            Commands::Watch => "watch",
        }
    }
}

impl Cli {
    /// Execute the parsed command line.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose { "debug" } else { "warn" };

        CliConfig {
            log_level: Some(log_level.to_string()),
            home: self.home.clone(),
        }
    }

    /// Execute with an explicit configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_tracing();
        tracing::debug!("Running '{}'", self.command.name());

        let env = SyncEnv::from_process(config.home)?;

        match self.command {
            Commands::Generate(cmd) => cmd.execute(&env, self.verbose).await,
            Commands::Import(cmd) => cmd.execute(&env, self.verbose).await,
            other => placeholder::execute(other.name()).await,
        }
    }
}

#[cfg(test)]
mod tests;
