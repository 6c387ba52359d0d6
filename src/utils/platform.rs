//! Platform helpers: home directory discovery and user path expansion.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Returns true when compiled for Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// Gets the home directory path for the current user.
///
/// - **Windows**: `%USERPROFILE%`
/// - **Unix/macOS**: `$HOME`
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        let platform_help = if is_windows() {
            "On Windows: Check that the USERPROFILE environment variable is set"
        } else {
            "On Unix/Linux: Check that the HOME environment variable is set"
        };
        anyhow::anyhow!("Could not determine home directory.\n\n{platform_help}")
    })
}

/// Expands a user-supplied path.
///
/// `~/rest` expands against `home` (not the process environment, so callers can
/// inject a home directory), then `$VAR` / `${VAR}` references are expanded with
/// `shellexpand`.
///
/// # Examples
///
/// ```rust,no_run
/// use mcpsync::utils::platform::resolve_path;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let path = resolve_path("~/work/app", Path::new("/home/dev"))?;
/// assert_eq!(path, Path::new("/home/dev/work/app"));
/// # Ok(())
/// # }
/// ```
pub fn resolve_path(path: &str, home: &Path) -> Result<PathBuf> {
    let expanded = if path == "~" {
        home.to_path_buf()
    } else if let Some(stripped) = path.strip_prefix("~/") {
        home.join(stripped)
    } else if path.starts_with('~') {
        return Err(anyhow::anyhow!(
            "Invalid path: {path}\n\n\
            Tilde expansion only supports '~/' for home directory.\n\
            Use '~/' followed by a relative path, like '~/projects/app'"
        ));
    } else {
        PathBuf::from(path)
    };

    let path_str = expanded.to_string_lossy();
    let expanded_str = shellexpand::env(&path_str)
        .with_context(|| {
            format!(
                "Failed to expand environment variables in path: {path_str}\n\n\
                Undefined variables and invalid syntax (use $VAR or ${{VAR}}) are rejected"
            )
        })?
        .into_owned();

    Ok(PathBuf::from(expanded_str))
}
