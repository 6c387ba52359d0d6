//! Import sources.
//!
//! Tools keep the configuration they *read* in different places and shapes than the
//! files mcpsync generates for them. Each importable tool is described by an
//! [`ImportSource`]: a local candidate, a global candidate, and the [`SourceFormat`]
//! used to pull a server mapping out of the file. One generic algorithm
//! ([`ImportSource::locate`] then [`SourceFormat::parse`]) serves every tool.

use crate::config::SyncEnv;
use crate::core::{SyncError, Tool};
use crate::mcp::models::ServerMap;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Where a candidate file lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidatePath {
    /// Relative to the working (project) directory
    Project(&'static str),
    /// Relative to the home directory
    Home(&'static str),
}

impl CandidatePath {
    /// Absolute path of this candidate in `env`.
    #[must_use]
    pub fn resolve(&self, env: &SyncEnv) -> PathBuf {
        match self {
            CandidatePath::Project(relative) => env.resolve(Path::new(relative)),
            CandidatePath::Home(relative) => env.home_path(relative),
        }
    }
}

/// How the server mapping is laid out inside a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `{"mcpServers": {...}}`
    McpServers,
    /// VS Code `settings.json`: `{"mcp": {"servers": {...}}}`, with a top-level
    /// `mcpServers` taking precedence when present
    VsCodeSettings,
}

impl SourceFormat {
    /// Extract the server mapping from `content`.
    ///
    /// # Errors
    ///
    /// [`SyncError::ImportParseError`] if `content` is not valid JSON, no server mapping
    /// can be found, or a server entry does not have the expected shape.
    pub fn parse(self, content: &str, path: &Path) -> Result<ServerMap, SyncError> {
        let parse_error = |reason: String| SyncError::ImportParseError {
            path: path.display().to_string(),
            reason,
        };

        let document: Value =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        let servers = match (self, document.get("mcpServers")) {
            (_, Some(servers)) => servers.clone(),
            (SourceFormat::VsCodeSettings, None) => match document.get("mcp") {
                // Anything under "mcp" without a "servers" mapping imports nothing
                Some(mcp) if !mcp.is_null() => mcp
                    .get("servers")
                    .filter(|servers| !servers.is_null())
                    .cloned()
                    .unwrap_or_else(|| Value::Object(Default::default())),
                _ => return Err(parse_error("no \"mcp.servers\" mapping found".to_string())),
            },
            (SourceFormat::McpServers, None) => {
                return Err(parse_error("no \"mcpServers\" mapping found".to_string()));
            }
        };

        if !servers.is_object() {
            return Err(parse_error("server mapping is not a JSON object".to_string()));
        }

        serde_json::from_value(servers).map_err(|e| parse_error(e.to_string()))
    }
}

/// Where to find a tool's configuration and how to read it.
#[derive(Debug, Clone, Copy)]
pub struct ImportSource {
    /// Tool this source belongs to
    pub tool: Tool,
    /// Checked first
    pub local: CandidatePath,
    /// Checked when the local candidate does not exist
    pub global: CandidatePath,
    /// Layout of the file
    pub format: SourceFormat,
}

static IMPORT_SOURCES: [ImportSource; 5] = [
    ImportSource {
        tool: Tool::Cursor,
        local: CandidatePath::Project(".cursor/mcp.json"),
        global: CandidatePath::Home(".cursor/mcp.json"),
        format: SourceFormat::McpServers,
    },
    ImportSource {
        tool: Tool::Cline,
        local: CandidatePath::Project("cline_mcp_settings.json"),
        global: CandidatePath::Project("cline_mcp_settings.json"),
        format: SourceFormat::McpServers,
    },
    ImportSource {
        tool: Tool::ClaudeCode,
        local: CandidatePath::Project(".mcp.json"),
        global: CandidatePath::Home(".mcp.json"),
        format: SourceFormat::McpServers,
    },
    ImportSource {
        tool: Tool::Copilot,
        local: CandidatePath::Project(".vscode/mcp.json"),
        global: CandidatePath::Project(".vscode/settings.json"),
        format: SourceFormat::VsCodeSettings,
    },
    ImportSource {
        tool: Tool::Roo,
        local: CandidatePath::Project(".roo/mcp.json"),
        global: CandidatePath::Project("mcp_settings.json"),
        format: SourceFormat::McpServers,
    },
];

impl ImportSource {
    /// All import sources.
    #[must_use]
    pub fn all() -> &'static [ImportSource] {
        &IMPORT_SOURCES
    }

    /// The import source for `tool`.
    ///
    /// # Errors
    ///
    /// [`SyncError::UnknownTool`] if the tool has no import source.
    pub fn for_tool(tool: Tool) -> Result<&'static ImportSource, SyncError> {
        IMPORT_SOURCES.iter().find(|source| source.tool == tool).ok_or_else(|| {
            SyncError::UnknownTool {
                tool: tool.id().to_string(),
            }
        })
    }

    /// Both candidate paths, local first.
    #[must_use]
    pub fn candidates(&self, env: &SyncEnv) -> (PathBuf, PathBuf) {
        (self.local.resolve(env), self.global.resolve(env))
    }

    /// The first existing candidate; local wins when both exist.
    ///
    /// # Errors
    ///
    /// [`SyncError::NoImportSource`] when neither candidate exists.
    pub fn locate(&self, env: &SyncEnv) -> Result<PathBuf, SyncError> {
        let (local, global) = self.candidates(env);

        for candidate in [&local, &global] {
            tracing::debug!("Checking {} for {} configuration", candidate.display(), self.tool);
            if candidate.is_file() {
                return Ok(candidate.clone());
            }
        }

        Err(SyncError::NoImportSource {
            tool: self.tool.id().to_string(),
            local: local.display().to_string(),
            global: global.display().to_string(),
        })
    }
}
