//! System operations - power control

use super::{OsError, OsResult};

/// Shut down the machine.
///
/// Without a password this calls `/sbin/shutdown -h now` directly and only
/// works with elevated privileges. With a password the command runs through
/// `sudo -S`, the password written to sudo's stdin.
#[cfg(not(windows))]
pub async fn shutdown(sudo_password: Option<&str>) -> OsResult<()> {
    use std::process::Stdio;
    use tokio::io::AsyncWriteExt;
    use tokio::process::Command;

    tracing::info!("Requesting system shutdown");

    let output = match sudo_password {
        None => {
            Command::new("/sbin/shutdown")
                .args(["-h", "now"])
                .output()
                .await?
        }
        Some(password) => {
            let mut child = Command::new("sudo")
                .args(["-S", "/sbin/shutdown", "-h", "now"])
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::piped())
                .spawn()?;

            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(password.as_bytes()).await?;
                stdin.write_all(b"\n").await?;
                // Dropping stdin closes the pipe so sudo stops waiting.
            }

            child.wait_with_output().await?
        }
    };

    if !output.status.success() {
        return Err(OsError::OperationFailed(
            String::from_utf8_lossy(&output.stderr).to_string(),
        ));
    }

    Ok(())
}

/// Shut down the machine.
#[cfg(windows)]
pub async fn shutdown(_sudo_password: Option<&str>) -> OsResult<()> {
    use tokio::process::Command;

    tracing::info!("Requesting system shutdown");

    let output = Command::new("shutdown").args(["/s", "/t", "1"]).output().await?;
    if !output.status.success() {
        return Err(OsError::OperationFailed(
            String::from_utf8_lossy(&output.stderr).to_string(),
        ));
    }

    Ok(())
}
