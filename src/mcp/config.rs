//! Reading, merging and saving the canonical configuration.

use crate::core::{SyncError, Tool};
use crate::mcp::models::{McpConfig, ServerMap};
use std::path::{Path, PathBuf};

/// Directory under a base directory that holds the canonical file.
pub const CONFIG_DIR: &str = ".mcpsync";

/// Canonical file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "mcp.json";

/// Path of the canonical configuration for `base_dir`.
#[must_use]
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Read the canonical configuration from `<base_dir>/.mcpsync/mcp.json`.
///
/// Pure read; nothing is created. Beyond successful parsing the content is not
/// validated.
///
/// # Errors
///
/// - [`SyncError::ConfigNotFound`] if the file does not exist
/// - [`SyncError::ConfigParseError`] if it cannot be read or is not valid JSON of the
///   expected shape
pub fn read_mcp_config(base_dir: &Path) -> Result<McpConfig, SyncError> {
    let path = config_path(base_dir);
    tracing::debug!("Reading MCP configuration from {}", path.display());

    if !path.exists() {
        return Err(SyncError::ConfigNotFound {
            path: path.display().to_string(),
        });
    }

    crate::utils::read_json_file(&path).map_err(|e| SyncError::ConfigParseError {
        reason: format!("{e:#}"),
    })
}

impl McpConfig {
    /// Load an existing canonical file, or start from an empty configuration if there is
    /// none.
    ///
    /// A file that exists but cannot be parsed is an error: it is never silently
    /// replaced.
    pub fn load_or_default(path: &Path) -> Result<Self, SyncError> {
        if path.exists() {
            crate::utils::read_json_file(path).map_err(|e| SyncError::ConfigParseError {
                reason: format!("{e:#}"),
            })
        } else {
            tracing::debug!("No configuration at {}, starting empty", path.display());
            Ok(Self::default())
        }
    }

    /// Write the configuration with two-space indentation, replacing any existing file
    /// and creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), SyncError> {
        crate::utils::write_json_file(path, self, true).map_err(|e| SyncError::WriteFailed {
            path: path.display().to_string(),
            reason: format!("{e:#}"),
        })
    }

    /// Merge servers imported from `tool`, renaming each to `<tool>-<name>`.
    ///
    /// Existing entries under other names are untouched. An existing entry with the same
    /// prefixed name is replaced. Returns the number of servers merged.
    pub fn merge_prefixed(&mut self, tool: Tool, imported: ServerMap) -> usize {
        let count = imported.len();
        for (name, server) in imported {
            let prefixed = format!("{}-{}", tool.id(), name);
            if self.mcp_servers.insert(prefixed.clone(), server).is_some() {
                tracing::debug!("Replaced existing server '{prefixed}'");
            }
        }
        count
    }
}
