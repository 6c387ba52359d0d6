//! Runtime environment for mcpsync operations
//!
//! mcpsync has no configuration file of its own beyond the canonical
//! `.mcpsync/mcp.json`. What it does need from the process (the working directory and
//! the user's home directory) is captured once in [`SyncEnv`] and passed explicitly to
//! every operation, so library code never reads process-global state.
//!
//! # Home directory resolution
//!
//! 1. `--home <DIR>` on the command line
//! 2. `MCPSYNC_HOME` environment variable (read by clap)
//! 3. The platform home directory (`$HOME`, `%USERPROFILE%`)

use crate::core::SyncError;
use std::path::{Path, PathBuf};

/// Working and home directories an operation runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncEnv {
    /// Directory relative paths are resolved against (the project directory)
    pub cwd: PathBuf,
    /// Directory tool configuration paths are resolved against
    pub home: PathBuf,
}

impl SyncEnv {
    /// Create an environment from explicit directories.
    pub fn new(cwd: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home: home.into(),
        }
    }

    /// Capture the process working directory and home directory.
    ///
    /// `home_override` takes precedence over the platform home directory.
    pub fn from_process(home_override: Option<PathBuf>) -> Result<Self, SyncError> {
        let cwd = std::env::current_dir().map_err(|e| SyncError::Other {
            message: format!("Failed to determine current directory: {e}"),
        })?;

        let home = match home_override {
            Some(home) => cwd.join(home),
            None => crate::utils::get_home_dir().map_err(|_| SyncError::HomeDirNotFound)?,
        };

        tracing::debug!("cwd={} home={}", cwd.display(), home.display());
        Ok(Self::new(cwd, home))
    }

    /// Resolve a possibly relative path against the working directory.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.cwd.join(path)
    }

    /// Resolve a path relative to the home directory.
    #[must_use]
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home.join(relative)
    }
}
