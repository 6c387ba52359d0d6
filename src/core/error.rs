//! Error handling for mcpsync
//!
//! The error system follows two rules:
//! 1. **Strongly-typed errors** ([`SyncError`]) so callers and tests can match on failure modes
//! 2. **User-friendly messages** ([`ErrorContext`]) with details and a suggestion for CLI users
//!
//! Library code returns [`SyncError`] (or `anyhow::Error` wrapping it). The binary funnels
//! whatever reaches `main` through [`user_friendly_error`] and prints the result in color.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mcpsync::core::{SyncError, user_friendly_error};
//!
//! let error = SyncError::ConfigNotFound {
//!     path: ".mcpsync/mcp.json".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // error / details / suggestion on stderr
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for mcpsync operations.
///
/// # Error Categories
///
/// ## Canonical configuration
/// - [`ConfigNotFound`] - `.mcpsync/mcp.json` is missing
/// - [`ConfigParseError`] - the file exists but cannot be read or parsed
///
/// ## Import
/// - [`NoImportSource`] - neither candidate file exists for the selected tool
/// - [`ImportParseError`] - the source file is invalid or has no server mapping
/// - [`UsageError`] - zero or several tools selected
///
/// ## Registry and output
/// - [`UnknownTool`] - identifier not present in the registry being consulted
/// - [`WriteFailed`] - a destination file could not be written
/// - [`GenerateFailed`] - summary of base directories that failed to generate
///
/// [`ConfigNotFound`]: SyncError::ConfigNotFound
/// [`ConfigParseError`]: SyncError::ConfigParseError
/// [`NoImportSource`]: SyncError::NoImportSource
/// [`ImportParseError`]: SyncError::ImportParseError
/// [`UsageError`]: SyncError::UsageError
/// [`UnknownTool`]: SyncError::UnknownTool
/// [`WriteFailed`]: SyncError::WriteFailed
/// [`GenerateFailed`]: SyncError::GenerateFailed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Canonical configuration file not found at the computed path
    #[error("MCP configuration file not found at {path}. Run 'mcpsync init' first.")]
    ConfigNotFound {
        /// The path that was checked
        path: String,
    },

    /// Canonical configuration exists but could not be read or parsed
    #[error("Failed to read MCP configuration: {reason}")]
    ConfigParseError {
        /// Underlying cause (I/O or JSON error text)
        reason: String,
    },

    /// No import candidate exists for the selected tool
    #[error("No MCP configuration found for {tool}")]
    NoImportSource {
        /// Tool identifier
        tool: String,
        /// Local candidate that was checked
        local: String,
        /// Global candidate that was checked
        global: String,
    },

    /// Import source file is invalid or does not contain a server mapping
    #[error("Failed to read MCP configuration from {path}: {reason}")]
    ImportParseError {
        /// Source file path
        path: String,
        /// Why it could not be used
        reason: String,
    },

    /// The command was invoked with an invalid combination of options
    #[error("{message}")]
    UsageError {
        /// Message shown to the user
        message: String,
    },

    /// Tool identifier is not registered
    #[error("Unknown tool: {tool}")]
    UnknownTool {
        /// The identifier that was looked up
        tool: String,
    },

    /// Writing a configuration file failed
    #[error("Failed to write MCP configuration to {path}: {reason}")]
    WriteFailed {
        /// Destination path
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// The user's home directory could not be determined
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// Placeholder command
    #[error("Command '{command}' is not implemented yet")]
    NotImplemented {
        /// Subcommand name
        command: String,
    },

    /// One or more base directories failed during generation
    #[error("Generation failed for {failed} of {total} {}", base_dir_noun(.total))]
    GenerateFailed {
        /// Number of failed base directories
        failed: usize,
        /// Number of base directories attempted
        total: usize,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

fn base_dir_noun(total: &usize) -> &'static str {
    if *total == 1 {
        "base directory"
    } else {
        "base directories"
    }
}

/// Error wrapper carrying user-facing details and a suggestion.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: SyncError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: SyncError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error (printed in green).
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error (printed in yellow).
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`].
///
/// Recognizes [`SyncError`], [`std::io::Error`] and [`serde_json::Error`]; everything
/// else is rendered with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(sync_error) = error.downcast_ref::<SyncError>() {
        return create_error_context(sync_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>()
        && io_error.kind() == std::io::ErrorKind::PermissionDenied
    {
        return ErrorContext::new(SyncError::Other {
            message: format!("Permission denied: {io_error}"),
        })
        .with_suggestion(if cfg!(windows) {
            "Check file permissions in File Explorer"
        } else {
            "Check file permissions with 'ls -la'"
        });
    }

    if let Some(json_error) = error.downcast_ref::<serde_json::Error>() {
        return ErrorContext::new(SyncError::Other {
            message: format!("Invalid JSON: {json_error}"),
        })
        .with_suggestion("Check for trailing commas, missing quotes, or unbalanced braces");
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(SyncError::Other {
        message,
    })
}

fn create_error_context(error: SyncError) -> ErrorContext {
    let (details, suggestion): (Option<String>, Option<&str>) = match &error {
        SyncError::ConfigNotFound { path } => (
            Some(format!("mcpsync reads the canonical server list from {path}")),
            Some("Run 'mcpsync init' or 'mcpsync import --<tool>' to create it"),
        ),
        SyncError::ConfigParseError { .. } => (
            Some("The file must contain an object with an \"mcpServers\" mapping".to_string()),
            Some("Fix the JSON syntax in .mcpsync/mcp.json"),
        ),
        SyncError::NoImportSource { local, global, .. } => (
            Some(format!("Searched {local} and {global}")),
            Some("Run the command from the project that holds the tool configuration"),
        ),
        SyncError::ImportParseError { .. } => (
            Some(
                "Expected an object with \"mcpServers\" (or \"mcp.servers\" for VS Code settings)"
                    .to_string(),
            ),
            None,
        ),
        SyncError::UsageError { .. } => {
            (None, Some("Run 'mcpsync import --help' to see the available tool flags"))
        }
        SyncError::UnknownTool { .. } => (
            Some("Supported tools: claudecode, cursor, cline, copilot, roo, geminicli".to_string()),
            None,
        ),
        SyncError::HomeDirNotFound => (
            None,
            Some(if cfg!(windows) {
                "Set the USERPROFILE environment variable or pass --home"
            } else {
                "Set the HOME environment variable or pass --home"
            }),
        ),
        SyncError::GenerateFailed { .. } => {
            (Some("See the messages above for the cause of each failure".to_string()), None)
        }
        _ => (None, None),
    };

    let mut ctx = ErrorContext::new(error);
    if let Some(details) = details {
        ctx = ctx.with_details(details);
    }
    if let Some(suggestion) = suggestion {
        ctx = ctx.with_suggestion(suggestion);
    }
    ctx
}
