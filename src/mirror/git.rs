//! Thin wrapper over the `git` executable.

use std::io;
use std::path::Path;

use tokio::process::Command;

use crate::error::MirrorError;

async fn execute(args: &[&str], cwd: Option<&Path>) -> Result<String, MirrorError> {
    let mut cmd = Command::new("git");
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    tracing::debug!(?args, ?cwd, "running git");

    let output = cmd.output().await.map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MirrorError::GitNotInstalled,
        _ => MirrorError::Io(e),
    })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(MirrorError::GitFailed(if stderr.is_empty() {
            format!("git {} exited with {}", args.join(" "), output.status)
        } else {
            stderr
        }))
    }
}

pub(super) async fn clone(url: &str, dest: &Path) -> Result<(), MirrorError> {
    let dest = dest.to_string_lossy();
    execute(&["clone", "--quiet", url, &*dest], None).await?;
    Ok(())
}

pub(super) async fn pull(repo: &Path) -> Result<(), MirrorError> {
    execute(&["pull", "--quiet", "--ff-only"], Some(repo)).await?;
    Ok(())
}

pub(super) async fn head(repo: &Path) -> Result<String, MirrorError> {
    execute(&["rev-parse", "HEAD"], Some(repo)).await
}
