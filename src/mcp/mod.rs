//! MCP (Model Context Protocol) server configuration synchronisation.
//!
//! One canonical file, `<base>/.mcpsync/mcp.json`, is the source of truth for the MCP
//! servers a developer uses. This module moves configuration in both directions:
//!
//! - [`generate`] writes the canonical configuration to every tool's destination file
//!   under the home directory
//! - [`import`] reads one tool's own configuration file and merges its servers into the
//!   canonical file with a `<tool>-` prefix
//!
//! # File layout
//!
//! ```text
//! project/
//! └── .mcpsync/
//!     └── mcp.json            canonical configuration
//! ~/
//! ├── .config/claude/mcp_servers.json
//! ├── .cursor/mcp_servers.json
//! └── ...                     one file per tool, see [`targets`]
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use mcpsync::config::SyncEnv;
//! use mcpsync::mcp::{GenerateOptions, generate};
//!
//! # fn example() -> anyhow::Result<()> {
//! let env = SyncEnv::from_process(None)?;
//! let report = generate(&GenerateOptions::default(), &env);
//! report.into_result()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod generate;
pub mod import;
pub mod models;
pub mod sources;
pub mod targets;

pub use config::{CONFIG_DIR, CONFIG_FILE, config_path, read_mcp_config};
pub use generate::{GenerateOptions, GenerateReport, GeneratedFile, generate};
pub use import::{ImportOptions, ImportReport, import};
pub use models::{McpConfig, McpServerConfig, STDIO_TRANSPORT, ServerMap};
pub use sources::{ImportSource, SourceFormat};
pub use targets::GenerateTarget;
