//! mcpsync - keep one MCP server configuration in sync across coding tools
//!
//! Every AI coding tool wants its own copy of the same MCP server list, in its own
//! file. mcpsync keeps a single canonical copy in `.mcpsync/mcp.json` and moves
//! configuration between it and the tools.
//!
//! # Architecture Overview
//!
//! - `generate` fans the canonical file out to one destination per tool under the home
//!   directory (Claude Code, Cursor, Cline, GitHub Copilot, Roo Code, Gemini CLI)
//! - `import` reads one tool's own configuration file and merges its servers back into
//!   the canonical file, renamed `<tool>-<name>` so tools never collide
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface (clap derive)
//! - [`config`] - Working/home directory environment passed to every operation
//! - [`core`] - Error types and the [`core::Tool`] registry
//! - [`mcp`] - Canonical configuration model, generation targets, import sources
//! - [`utils`] - File and path helpers
//!
//! # Canonical File Format (.mcpsync/mcp.json)
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "filesystem": {
//!       "type": "stdio",
//!       "command": "npx",
//!       "args": ["-y", "@modelcontextprotocol/server-filesystem", "."],
//!       "env": {"DEBUG": "1"}
//!     }
//!   }
//! }
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Generate every tool's configuration
//! mcpsync generate
//!
//! # Only Cursor, from two projects, with progress output
//! mcpsync generate --cursor --base-dir ./api,./web --verbose
//!
//! # Bring Cursor's existing servers into .mcpsync/mcp.json
//! mcpsync import --cursor
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
