use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server name → server configuration.
///
/// An `IndexMap` keeps servers in the order they appear on disk, so a rewritten file
/// reads the way the user wrote it and regenerating from an unchanged canonical file
/// produces byte-identical files.
pub type ServerMap = IndexMap<String, McpServerConfig>;

/// `type` value for servers launched as a child process over stdin/stdout.
pub const STDIO_TRANSPORT: &str = "stdio";

/// The canonical configuration file structure for `.mcpsync/mcp.json`.
///
/// The same shape is written to every tool destination (after that tool's transform)
/// and read from most import sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct McpConfig {
    /// Map of server names to their configurations
    #[serde(rename = "mcpServers", default)]
    pub mcp_servers: ServerMap,

    /// Other top-level keys preserved from the file on disk
    #[serde(flatten)]
    pub other: IndexMap<String, Value>,
}

/// Individual MCP server configuration.
///
/// Nothing beyond the JSON shape is checked: a remote server with only a `url`, a
/// `type` other than `"stdio"`, or non-string environment values all pass through
/// unchanged.
///
/// Every optional field distinguishes "absent" from "empty": `None` is not written at
/// all, `Some(vec![])` is written as `[]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpServerConfig {
    /// Launch mechanism discriminator (`"type"` on disk), e.g. `"stdio"`, `"sse"`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,

    /// Executable name or path (stdio servers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Process arguments in invocation order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// Environment variable overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<IndexMap<String, Value>>,

    /// Endpoint of a remote (HTTP/SSE) server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// HTTP headers sent to a remote server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, Value>>,

    /// Capabilities the tool may use without prompting (Cline, Roo)
    #[serde(rename = "alwaysAllow", default, skip_serializing_if = "Option::is_none")]
    pub always_allow: Option<Vec<String>>,

    /// Whether the tool should skip this server (Cline, Roo)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Tool-specific fields carried through untouched
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl McpServerConfig {
    /// A stdio server with only a command set.
    pub fn stdio(command: impl Into<String>) -> Self {
        Self {
            transport: Some(STDIO_TRANSPORT.to_string()),
            command: Some(command.into()),
            args: None,
            env: None,
            url: None,
            headers: None,
            always_allow: None,
            disabled: None,
            extra: IndexMap::new(),
        }
    }

    /// Builder-style helper to set arguments.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }
}
