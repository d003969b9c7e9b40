//! Desktop operations - opening folders with the default file manager

use super::filesystem::expand_user;
use super::{OsError, OsResult};
use tokio::process::Command;

#[cfg(windows)]
const OPENER: &str = "explorer";
#[cfg(not(windows))]
const OPENER: &str = "xdg-open";

/// Open a directory in the default file manager.
///
/// A leading `~` is expanded first. The opener is spawned and not waited on;
/// the file manager outlives the call.
pub async fn open_dir(path: &str) -> OsResult<()> {
    let target = expand_user(path);
    if !target.exists() {
        return Err(OsError::NotFound(target.display().to_string()));
    }

    Command::new(OPENER)
        .arg(&target)
        .spawn()
        .map_err(OsError::Io)?;
    Ok(())
}
