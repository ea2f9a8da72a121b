//! Data directory resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "VOXMCP_DATA_DIR";

/// Directory name used under the system data directory.
const APP_DIR_NAME: &str = "voxmcp";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `VOXMCP_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/voxmcp`)
pub fn data_root() -> Result<PathBuf, PathError> {
    let from_env = env::var(DATA_DIR_ENV).ok();
    data_root_from(from_env.as_deref())
}

/// Resolve the data root from an explicit override, creating it if missing.
///
/// A blank override is treated as absent.
pub fn data_root_from(override_dir: Option<&str>) -> Result<PathBuf, PathError> {
    let root = match override_dir.filter(|raw| !raw.trim().is_empty()) {
        Some(raw) => normalize_user_path(raw)?,
        None => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join(APP_DIR_NAME),
    };

    ensure_dir(&root)?;
    Ok(root)
}

pub(super) fn ensure_dir(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
