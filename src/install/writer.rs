//! File writers used by the installer.
//!
//! [`DirectWriter`] writes with the current user's permissions.
//! [`SudoWriter`] shells out to `sudo` for directories the user cannot
//! write to.

use async_trait::async_trait;
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use crate::error::WriteError;

/// Capability to write a whole file, creating its parent directory.
#[async_trait]
pub trait PrivilegedWriter: Send + Sync {
    async fn write(&self, path: &Path, contents: &str) -> Result<(), WriteError>;

    /// Whether `path` already exists. Fails when existence cannot be
    /// determined, such as an unreadable parent directory.
    async fn exists(&self, path: &Path) -> Result<bool, WriteError> {
        tokio::fs::try_exists(path)
            .await
            .map_err(|e| WriteError::from_io(path, e))
    }
}

/// Plain filesystem writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectWriter;

#[async_trait]
impl PrivilegedWriter for DirectWriter {
    async fn write(&self, path: &Path, contents: &str) -> Result<(), WriteError> {
        if let Some(dir) = parent_dir(path) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| WriteError::from_io(dir, e))?;
        }
        tokio::fs::write(path, contents)
            .await
            .map_err(|e| WriteError::from_io(path, e))
    }
}

/// Writer that runs `mkdir -p` and `cp` through `sudo`.
///
/// Contents are staged in a private temp file first, so nothing is passed on
/// the command line.
#[derive(Debug, Clone)]
pub struct SudoWriter {
    program: PathBuf,
}

impl Default for SudoWriter {
    fn default() -> Self {
        Self::with_program("sudo")
    }
}

impl SudoWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `program` as the elevation wrapper instead of `sudo`.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run(&self, args: &[&OsStr]) -> Result<(), WriteError> {
        let label = format!(
            "{} {}",
            self.program.display(),
            args.iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );
        tracing::debug!(command = %label, "running elevated command");

        // stdin stays attached so sudo can ask for a password.
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| WriteError::Elevation(format!("{label}: {e}")))?;

        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let status = output
            .status
            .code()
            .map(|code| format!("exit status {code}"))
            .unwrap_or_else(|| "terminated by signal".to_string());
        Err(WriteError::Elevation(if stderr.is_empty() {
            format!("{label}: {status}")
        } else {
            format!("{label}: {status}: {stderr}")
        }))
    }
}

#[async_trait]
impl PrivilegedWriter for SudoWriter {
    async fn write(&self, path: &Path, contents: &str) -> Result<(), WriteError> {
        if let Some(dir) = parent_dir(path) {
            self.run(&[OsStr::new("mkdir"), OsStr::new("-p"), dir.as_os_str()])
                .await?;
        }

        let mut staged = tempfile::Builder::new()
            .prefix("vibejam-")
            .tempfile()
            .map_err(|e| WriteError::Elevation(format!("failed to stage theme: {e}")))?;
        let staged_write = staged.write_all(contents.as_bytes());
        staged_write
            .and_then(|()| staged.flush())
            .map_err(|e| WriteError::Elevation(format!("failed to stage theme: {e}")))?;

        self.run(&[OsStr::new("cp"), staged.path().as_os_str(), path.as_os_str()])
            .await
    }
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|dir| !dir.as_os_str().is_empty())
}
