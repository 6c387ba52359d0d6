//! Pull one tool's server definitions into the canonical configuration.
//!
//! Imported servers are renamed to `<tool>-<name>` and merged into
//! `<project>/.mcpsync/mcp.json`. Entries already in the canonical file survive; an
//! entry with the same prefixed name is replaced, and new entries keep the order they
//! had in the source file. Nothing is written unless every step before the final save
//! succeeded.

use crate::config::SyncEnv;
use crate::core::{SyncError, Tool};
use crate::mcp::config::config_path;
use crate::mcp::models::McpConfig;
use crate::mcp::sources::ImportSource;
use std::path::PathBuf;

const NO_TOOL_MESSAGE: &str = "Please specify at least one tool to import from using --cursor, --cline, --claudecode, --copilot, or --roo";
const MANY_TOOLS_MESSAGE: &str = "Please specify only one tool at a time";

/// Inputs to [`import`].
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Selected tools; exactly one (after deduplication) is required
    pub tools: Vec<Tool>,
}

/// What an [`import`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Tool the servers came from
    pub tool: Tool,
    /// File the servers were read from
    pub source_path: PathBuf,
    /// Canonical file that was written
    pub canonical_path: PathBuf,
    /// Original (unprefixed) names of the imported servers, in source order
    pub imported: Vec<String>,
}

/// The single tool to import from.
///
/// # Errors
///
/// [`SyncError::UsageError`] when no tool or more than one distinct tool is selected.
pub fn select_tool(tools: &[Tool]) -> Result<Tool, SyncError> {
    let mut distinct = tools.to_vec();
    distinct.sort();
    distinct.dedup();

    match distinct.as_slice() {
        [tool] => Ok(*tool),
        [] => Err(SyncError::UsageError {
            message: NO_TOOL_MESSAGE.to_string(),
        }),
        _ => Err(SyncError::UsageError {
            message: MANY_TOOLS_MESSAGE.to_string(),
        }),
    }
}

/// Import one tool's servers into the project's canonical configuration.
///
/// # Errors
///
/// - [`SyncError::UsageError`] for a bad tool selection
/// - [`SyncError::UnknownTool`] for a tool with no import source
/// - [`SyncError::NoImportSource`] when neither candidate file exists
/// - [`SyncError::ImportParseError`] when the source file cannot be used
/// - [`SyncError::ConfigParseError`] when the existing canonical file is corrupt
/// - [`SyncError::WriteFailed`] when the canonical file cannot be written
pub fn import(options: &ImportOptions, env: &SyncEnv) -> Result<ImportReport, SyncError> {
    let tool = select_tool(&options.tools)?;
    let source = ImportSource::for_tool(tool)?;

    let source_path = source.locate(env)?;
    let content =
        crate::utils::fs::read_text_file(&source_path).map_err(|e| SyncError::ImportParseError {
            path: source_path.display().to_string(),
            reason: format!("{e:#}"),
        })?;
    let servers = source.format.parse(&content, &source_path)?;
    let imported: Vec<String> = servers.keys().cloned().collect();
    tracing::debug!("Found {} servers in {}", imported.len(), source_path.display());

    let canonical_path = config_path(&env.cwd);
    let mut config = McpConfig::load_or_default(&canonical_path)?;
    let merged = config.merge_prefixed(tool, servers);
    config.save(&canonical_path)?;
    tracing::debug!("Merged {merged} servers into {}", canonical_path.display());

    Ok(ImportReport {
        tool,
        source_path,
        canonical_path,
        imported,
    })
}
