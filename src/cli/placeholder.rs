//! Subcommands that are registered but not implemented yet.

use anyhow::Result;

use crate::core::SyncError;

/// Fail with [`SyncError::NotImplemented`] for `command`.
pub async fn execute(command: &str) -> Result<()> {
    tracing::debug!("'{command}' invoked");
    Err(SyncError::NotImplemented {
        command: command.to_string(),
    }
    .into())
}
