//! Generate every tool's MCP configuration from the canonical file.
//!
//! # Examples
//!
//! Generate for all tools from `./.mcpsync/mcp.json`:
//! ```bash
//! mcpsync generate
//! ```
//!
//! Only Cursor and Roo, from two projects:
//! ```bash
//! mcpsync generate --cursor --roo --base-dir ./api,./web
//! ```
//!
//! # Exit status
//!
//! Every base directory is attempted. The command fails if any of them failed.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::cli::common::ToolFlags;
use crate::config::SyncEnv;
use crate::mcp::{GenerateOptions, GenerateReport, generate};
use crate::utils::resolve_path;

/// Write `.mcpsync/mcp.json` out to each tool's configuration file.
#[derive(Args, Debug)]
pub struct GenerateCommand {
    #[command(flatten)]
    tools: ToolFlags,

    /// Comma-separated base directories containing `.mcpsync/mcp.json`
    #[arg(long = "base-dir", default_value = ".", value_name = "DIRS")]
    base_dir: String,

    /// Remove stale generated files (currently has no effect)
    #[arg(long)]
    delete: bool,
}

impl GenerateCommand {
    /// Run generation against `env`.
    pub async fn execute(self, env: &SyncEnv, verbose: bool) -> Result<()> {
        let options = self.options(env)?;
        let report = generate(&options, env);
        print_report(&report, verbose);
        report.into_result()?;
        Ok(())
    }

    fn options(&self, env: &SyncEnv) -> Result<GenerateOptions> {
        let base_dirs = parse_base_dirs(&self.base_dir)
            .into_iter()
            .map(|dir| resolve_path(dir, &env.home))
            .collect::<Result<Vec<_>>>()?;

        let selected = self.tools.selected();
        Ok(GenerateOptions {
            base_dirs,
            tools: (!selected.is_empty()).then_some(selected),
            delete: self.delete,
        })
    }
}

/// Print each base directory's outcome in processing order.
fn print_report(report: &GenerateReport, verbose: bool) {
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(files) => {
                if verbose {
                    let names: Vec<&str> = report.tools.iter().map(|tool| tool.id()).collect();
                    println!("Generating MCP configurations for: {}", names.join(", "));
                    for file in files {
                        println!(
                            "{} Generated {} configuration at {}",
                            "✓".green(),
                            file.tool,
                            file.path.display()
                        );
                    }
                }
                println!("Generated MCP configurations for {} tools", files.len());
            }
            Err(e) => {
                eprintln!(
                    "Error generating configurations for {}: {}",
                    outcome.base_dir.display(),
                    e
                );
            }
        }
    }
}

/// Split a `--base-dir` value on commas, trimming entries and dropping empty ones.
#[must_use]
pub fn parse_base_dirs(value: &str) -> Vec<&str> {
    value.split(',').map(str::trim).filter(|dir| !dir.is_empty()).collect()
}
