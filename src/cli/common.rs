//! Argument groups shared by several commands

use clap::Args;

use crate::core::Tool;

/// One boolean flag per tool, e.g. `--cursor --roo`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolFlags {
    /// Claude Code
    #[arg(long)]
    pub claudecode: bool,

    /// Cursor
    #[arg(long)]
    pub cursor: bool,

    /// Cline
    #[arg(long)]
    pub cline: bool,

    /// GitHub Copilot
    #[arg(long)]
    pub copilot: bool,

    /// Roo Code
    #[arg(long)]
    pub roo: bool,

    /// Gemini CLI
    #[arg(long)]
    pub geminicli: bool,
}

impl ToolFlags {
    /// Tools whose flag is set, in registry order.
    #[must_use]
    pub fn selected(&self) -> Vec<Tool> {
        Tool::ALL.into_iter().filter(|&tool| self.is_set(tool)).collect()
    }

    const fn is_set(&self, tool: Tool) -> bool {
        match tool {
            Tool::ClaudeCode => self.claudecode,
            Tool::Cursor => self.cursor,
            Tool::Cline => self.cline,
            Tool::Copilot => self.copilot,
            Tool::Roo => self.roo,
            Tool::GeminiCli => self.geminicli,
        }
    }
}
