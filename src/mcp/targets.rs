//! Generation targets.
//!
//! Each [`Tool`] has exactly one [`GenerateTarget`]: where its file lives under the
//! home directory and how the canonical configuration is shaped for it. Adding a tool
//! means adding a [`Tool`] variant and one row to the table below.

use crate::core::{SyncError, Tool};
use crate::mcp::models::McpConfig;
use std::path::{Path, PathBuf};

/// Shapes the canonical configuration into a tool's on-disk form.
pub type Transform = fn(&McpConfig) -> McpConfig;

/// Destination and transformation for one tool.
#[derive(Debug, Clone, Copy)]
pub struct GenerateTarget {
    /// Tool this target belongs to
    pub tool: Tool,
    /// Path components relative to the home directory
    pub relative_path: &'static [&'static str],
    /// Canonical → tool-specific configuration
    pub transform: Transform,
}

fn identity(config: &McpConfig) -> McpConfig {
    config.clone()
}

// Indexed by `Tool as usize`; order must match `Tool::ALL`.
static GENERATE_TARGETS: [GenerateTarget; 6] = [
    GenerateTarget {
        tool: Tool::ClaudeCode,
        relative_path: &[".config", "claude", "mcp_servers.json"],
        transform: identity,
    },
    GenerateTarget {
        tool: Tool::Cursor,
        relative_path: &[".cursor", "mcp_servers.json"],
        transform: identity,
    },
    GenerateTarget {
        tool: Tool::Cline,
        relative_path: &[".cline", "mcp_servers.json"],
        transform: identity,
    },
    GenerateTarget {
        tool: Tool::Copilot,
        relative_path: &[".config", "github-copilot", "mcp_servers.json"],
        transform: identity,
    },
    GenerateTarget {
        tool: Tool::Roo,
        relative_path: &[".roo", "mcp_servers.json"],
        transform: identity,
    },
    GenerateTarget {
        tool: Tool::GeminiCli,
        relative_path: &[".config", "gemini", "mcp_servers.json"],
        transform: identity,
    },
];

impl GenerateTarget {
    /// All targets in registry order.
    #[must_use]
    pub fn all() -> &'static [GenerateTarget] {
        &GENERATE_TARGETS
    }

    /// The target for `tool`. Every tool has one.
    #[must_use]
    pub fn for_tool(tool: Tool) -> &'static GenerateTarget {
        &GENERATE_TARGETS[tool as usize]
    }

    /// Look a target up by tool identifier.
    ///
    /// # Errors
    ///
    /// [`SyncError::UnknownTool`] if `id` is not a registered tool.
    pub fn lookup(id: &str) -> Result<&'static GenerateTarget, SyncError> {
        id.parse::<Tool>().map(Self::for_tool)
    }

    /// Absolute destination path under `home`.
    #[must_use]
    pub fn destination(&self, home: &Path) -> PathBuf {
        self.relative_path.iter().fold(home.to_path_buf(), |path, part| path.join(part))
    }

    /// Apply this target's transformation.
    #[must_use]
    pub fn apply(&self, config: &McpConfig) -> McpConfig {
        (self.transform)(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::models::McpServerConfig;

    #[test]
    fn test_table_matches_tool_order() {
        assert_eq!(GenerateTarget::all().len(), Tool::ALL.len());
        for (target, tool) in GenerateTarget::all().iter().zip(Tool::ALL) {
            assert_eq!(target.tool, tool);
            assert_eq!(GenerateTarget::for_tool(tool).tool, tool);
        }
    }

    #[test]
    fn test_destinations() {
        let home = Path::new("/home/dev");
        let expected = [
            (Tool::ClaudeCode, ".config/claude/mcp_servers.json"),
            (Tool::Cursor, ".cursor/mcp_servers.json"),
            (Tool::Cline, ".cline/mcp_servers.json"),
            (Tool::Copilot, ".config/github-copilot/mcp_servers.json"),
            (Tool::Roo, ".roo/mcp_servers.json"),
            (Tool::GeminiCli, ".config/gemini/mcp_servers.json"),
        ];
        for (tool, relative) in expected {
            let want: PathBuf = relative.split('/').fold(home.to_path_buf(), |p, c| p.join(c));
            assert_eq!(GenerateTarget::for_tool(tool).destination(home), want);
        }
    }

    #[test]
    fn test_destinations_are_distinct() {
        let home = Path::new("/h");
        let mut paths: Vec<PathBuf> =
            GenerateTarget::all().iter().map(|t| t.destination(home)).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 6);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(GenerateTarget::lookup("roo").unwrap().tool, Tool::Roo);
        assert!(matches!(
            GenerateTarget::lookup("emacs"),
            Err(SyncError::UnknownTool { .. })
        ));
    }

    #[test]
    fn test_transforms_are_identity() {
        let mut config = McpConfig::default();
        config
            .mcp_servers
            .insert("demo".to_string(), McpServerConfig::stdio("node").with_args(["./s.js"]));

        for target in GenerateTarget::all() {
            assert_eq!(target.apply(&config), config);
        }
    }
}
