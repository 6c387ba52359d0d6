//! Test environment setup and management

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::SyncEnv;
use crate::core::Tool;
use crate::mcp::{GenerateTarget, config_path};

/// A canonical configuration with one fully populated server.
pub const SAMPLE_CONFIG: &str = r#"{
  "mcpServers": {
    "test-server": {
      "type": "stdio",
      "command": "node",
      "args": ["./server.js"],
      "env": {
        "API_KEY": "test"
      }
    }
  }
}"#;

/// Temporary project and home directories, removed on drop.
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub project_dir: PathBuf,
    pub home_dir: PathBuf,
}

impl TestEnvironment {
    /// Create a new test environment
    pub fn new() -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        let home_dir = temp_dir.path().join("home");

        fs::create_dir_all(&project_dir)?;
        fs::create_dir_all(&home_dir)?;

        Ok(Self {
            temp_dir,
            project_dir,
            home_dir,
        })
    }

    /// Create a test environment whose project already has [`SAMPLE_CONFIG`]
    pub fn with_sample_config() -> Result<Self> {
        let env = Self::new()?;
        env.write_canonical(SAMPLE_CONFIG)?;
        Ok(env)
    }

    /// The [`SyncEnv`] rooted in this environment
    #[must_use]
    pub fn sync_env(&self) -> SyncEnv {
        SyncEnv::new(&self.project_dir, &self.home_dir)
    }

    /// Write `<project>/.mcpsync/mcp.json`
    pub fn write_canonical(&self, content: &str) -> Result<PathBuf> {
        self.write_canonical_in(".", content)
    }

    /// Write `<project>/<base_dir>/.mcpsync/mcp.json`
    pub fn write_canonical_in(&self, base_dir: &str, content: &str) -> Result<PathBuf> {
        let path = config_path(&self.project_dir.join(base_dir));
        write_file(&path, content)?;
        Ok(path)
    }

    /// Path of the project's canonical file
    #[must_use]
    pub fn canonical_path(&self) -> PathBuf {
        config_path(&self.project_dir)
    }

    /// Write a file relative to the project directory
    pub fn write_project_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.project_dir.join(relative);
        write_file(&path, content)?;
        Ok(path)
    }

    /// Write a file relative to the home directory
    pub fn write_home_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.home_dir.join(relative);
        write_file(&path, content)?;
        Ok(path)
    }

    /// Where `generate` writes `tool`'s file in this environment
    #[must_use]
    pub fn generated_path(&self, tool: Tool) -> PathBuf {
        GenerateTarget::for_tool(tool).destination(&self.home_dir)
    }

    /// Check if a file exists relative to the project directory
    #[must_use]
    pub fn project_file_exists(&self, relative: &str) -> bool {
        self.project_dir.join(relative).exists()
    }

    /// Read and parse a JSON file
    pub fn read_json(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
