//! Tool identifiers.
//!
//! Every integration mcpsync writes to (or imports from) is one variant of [`Tool`].
//! The identifier string doubles as the server-name prefix used by import, so it is
//! kept short and lowercase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::SyncError;

/// A coding tool with its own MCP configuration file.
///
/// The variant order is the registry order: it decides the order tools are generated
/// in when no explicit selection is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Claude Code
    ClaudeCode,
    /// Cursor editor
    Cursor,
    /// Cline VS Code extension
    Cline,
    /// GitHub Copilot (VS Code)
    Copilot,
    /// Roo Code
    Roo,
    /// Gemini CLI
    GeminiCli,
}

impl Tool {
    /// All registered tools, in registry order.
    pub const ALL: [Tool; 6] =
        [Tool::ClaudeCode, Tool::Cursor, Tool::Cline, Tool::Copilot, Tool::Roo, Tool::GeminiCli];

    /// Short identifier used on the command line and as the import prefix.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Tool::ClaudeCode => "claudecode",
            Tool::Cursor => "cursor",
            Tool::Cline => "cline",
            Tool::Copilot => "copilot",
            Tool::Roo => "roo",
            Tool::GeminiCli => "geminicli",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tool {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL.into_iter().find(|tool| tool.id() == s.trim().to_lowercase()).ok_or_else(|| {
            SyncError::UnknownTool {
                tool: s.to_string(),
            }
        })
    }
}
