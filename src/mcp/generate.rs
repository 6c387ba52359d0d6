//! Fan the canonical configuration out to every tool's destination file.
//!
//! Base directories are processed strictly in the order given. A failure in one base
//! directory is recorded and the next one is still attempted. Nothing is printed here:
//! the [`GenerateReport`] carries every outcome so the caller can render it and decide
//! the exit status.

use crate::config::SyncEnv;
use crate::core::{SyncError, Tool};
use crate::mcp::config::read_mcp_config;
use crate::mcp::targets::GenerateTarget;
use std::path::PathBuf;

/// Inputs to [`generate`].
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Base directories, relative ones resolved against the working directory
    pub base_dirs: Vec<PathBuf>,
    /// Tool subset; `None` or empty means every registered tool
    pub tools: Option<Vec<Tool>>,
    /// Accepted for command-line compatibility; has no effect
    pub delete: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            base_dirs: vec![PathBuf::from(".")],
            tools: None,
            delete: false,
        }
    }
}

/// A destination file written for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Tool the file was generated for
    pub tool: Tool,
    /// Absolute destination path
    pub path: PathBuf,
}

/// Result of processing one base directory.
#[derive(Debug, Clone)]
pub struct BaseDirOutcome {
    /// Base directory as supplied by the caller
    pub base_dir: PathBuf,
    /// Files written, or the error that stopped this base directory
    pub result: Result<Vec<GeneratedFile>, SyncError>,
}

/// Outcome of a whole [`generate`] run.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Tools generated for in each base directory, in registry order
    pub tools: Vec<Tool>,
    /// One entry per base directory, in processing order
    pub outcomes: Vec<BaseDirOutcome>,
}

impl GenerateReport {
    /// Number of base directories that failed.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.result.is_err()).count()
    }

    /// Every file written across all base directories.
    pub fn generated(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.outcomes.iter().filter_map(|outcome| outcome.result.as_ref().ok()).flatten()
    }

    /// `Ok` if every base directory succeeded.
    ///
    /// # Errors
    ///
    /// [`SyncError::GenerateFailed`] with the failure count otherwise.
    pub fn into_result(self) -> Result<Self, SyncError> {
        match self.failures() {
            0 => Ok(self),
            failed => Err(SyncError::GenerateFailed {
                failed,
                total: self.outcomes.len(),
            }),
        }
    }
}

/// The tools to generate for, deduplicated and in registry order.
#[must_use]
pub fn resolve_tools(selection: Option<&[Tool]>) -> Vec<Tool> {
    match selection {
        Some(selected) if !selected.is_empty() => {
            Tool::ALL.into_iter().filter(|tool| selected.contains(tool)).collect()
        }
        _ => Tool::ALL.to_vec(),
    }
}

/// Generate every selected tool's file from one base directory's canonical file.
///
/// # Errors
///
/// - [`SyncError::ConfigNotFound`] / [`SyncError::ConfigParseError`] when the canonical
///   file is missing or unreadable; nothing is written in that case
/// - [`SyncError::WriteFailed`] when a destination cannot be written; files already
///   written for earlier tools stay in place
pub fn generate_for_base_dir(
    base_dir: &std::path::Path,
    tools: &[Tool],
    env: &SyncEnv,
) -> Result<Vec<GeneratedFile>, SyncError> {
    let config = read_mcp_config(&env.resolve(base_dir))?;

    let mut generated = Vec::with_capacity(tools.len());
    for &tool in tools {
        let target = GenerateTarget::for_tool(tool);
        let destination = target.destination(&env.home);

        target.apply(&config).save(&destination)?;
        tracing::debug!("Wrote {} ({} servers)", destination.display(), config.mcp_servers.len());

        generated.push(GeneratedFile {
            tool,
            path: destination,
        });
    }

    Ok(generated)
}

/// Generate tool files for every base directory in `options`.
///
/// Never stops early: each base directory's error is recorded in the report and
/// logged.
pub fn generate(options: &GenerateOptions, env: &SyncEnv) -> GenerateReport {
    if options.delete {
        tracing::debug!("--delete has no effect; stale destination files are left in place");
    }

    if options.base_dirs.is_empty() {
        tracing::warn!("No base directories given, nothing to generate");
        return GenerateReport::default();
    }

    let mut report = GenerateReport {
        tools: resolve_tools(options.tools.as_deref()),
        outcomes: Vec::with_capacity(options.base_dirs.len()),
    };

    for base_dir in &options.base_dirs {
        let result = generate_for_base_dir(base_dir, &report.tools, env);

        if let Err(e) = &result {
            tracing::debug!("Generation failed for {}: {e}", base_dir.display());
        }

        report.outcomes.push(BaseDirOutcome {
            base_dir: base_dir.clone(),
            result,
        });
    }

    report
}
