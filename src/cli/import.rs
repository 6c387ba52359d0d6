//! Import one tool's MCP servers into the canonical file.
//!
//! ```bash
//! mcpsync import --cursor
//! ```
//!
//! Servers are renamed `<tool>-<name>` and merged into `./.mcpsync/mcp.json`.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::cli::common::ToolFlags;
use crate::config::SyncEnv;
use crate::mcp::import::select_tool;
use crate::mcp::{ImportOptions, ImportReport, ImportSource, import};

/// Merge a tool's configuration into `.mcpsync/mcp.json`.
#[derive(Args, Debug)]
pub struct ImportCommand {
    #[command(flatten)]
    tools: ToolFlags,
}

impl ImportCommand {
    /// Run the import against `env`.
    pub async fn execute(self, env: &SyncEnv, verbose: bool) -> Result<()> {
        let options = ImportOptions {
            tools: self.tools.selected(),
        };

        if verbose {
            print_candidates(&options, env);
        }

        let report = import(&options, env)?;
        print_report(&report, verbose);
        Ok(())
    }
}

fn print_candidates(options: &ImportOptions, env: &SyncEnv) {
    if let Ok(tool) = select_tool(&options.tools)
        && let Ok(source) = ImportSource::for_tool(tool)
    {
        let (local, global) = source.candidates(env);
        println!("Looking for {tool} configuration in:");
        println!("  {}", local.display());
        println!("  {}", global.display());
    }
}

fn print_report(report: &ImportReport, verbose: bool) {
    println!("{} Successfully imported MCP configuration from {}", "✓".green(), report.tool);
    println!("Configuration file: {}", report.source_path.display());
    println!("Imported {} server(s)", report.imported.len());
    if verbose {
        println!("Imported servers: {}", report.imported.join(", "));
    }
}
