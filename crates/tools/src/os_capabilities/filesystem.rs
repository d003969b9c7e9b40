//! Filesystem operations - path expansion and directory management

use super::{OsError, OsResult};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading `~` (and `~` paths when no home directory can be
/// resolved) are returned unchanged.
pub fn expand_user(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            let rest = rest.trim_start_matches(['/', '\\']);
            if rest.is_empty() {
                return home;
            }
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Return the fully resolved directory containing the given file.
pub async fn absolute_parent<P: AsRef<Path>>(file: P) -> OsResult<PathBuf> {
    let resolved = fs::canonicalize(file.as_ref()).await?;
    resolved
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| OsError::OperationFailed(format!("no parent for {}", resolved.display())))
}

/// Create the directory (and any missing parents) if it does not exist.
pub async fn ensure_dir<P: AsRef<Path>>(path: P) -> OsResult<()> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("Creating directory: {}", path.display());
        fs::create_dir_all(path).await?;
    }
    Ok(())
}

/// Per-user configuration root: `%AppData%` on Windows, `~/.config` elsewhere.
pub fn config_dir() -> OsResult<PathBuf> {
    dirs::config_dir().ok_or_else(|| OsError::NotFound("user config directory".to_string()))
}
