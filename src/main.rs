//! mcpsync CLI entry point
//!
//! Parses the command line, runs the command, and turns any error into a colored
//! message on stderr with exit status 1.
//!
//! - `generate` - write `.mcpsync/mcp.json` to every tool's configuration file
//! - `import` - merge one tool's configuration into `.mcpsync/mcp.json`

use anyhow::Result;
use clap::Parser;
use mcpsync::cli;
use mcpsync::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
