//! Theme persistence and installation.
//!
//! A run writes two artifacts: pretty JSON under the project `json_dir` for
//! inspection, then the flattened theme under Ghostty's themes directory.
//! A permission-denied install write can be retried once through an
//! elevated writer, subject to [`ElevationPolicy`].

mod writer;

use std::path::{Path, PathBuf};

use crate::config::{ElevationPolicy, InstallConfig, OverwritePolicy};
use crate::error::{InstallError, WriteError};
use crate::theme::{to_ghostty_conf, ThemeName, ThemeSpec};

pub use writer::{DirectWriter, PrivilegedWriter, SudoWriter};

/// Asks the user whether a denied install may be retried with elevation.
pub trait ElevationPrompt: Send + Sync {
    fn confirm_elevation(&self, target: &Path) -> bool;
}

/// Prompt that always declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclineElevation;

impl ElevationPrompt for DeclineElevation {
    fn confirm_elevation(&self, _target: &Path) -> bool {
        false
    }
}

/// What an install run did (or, for a dry run, would do).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub json_path: PathBuf,
    pub target_path: PathBuf,
    /// `None` for a dry run.
    pub installed: Option<PathBuf>,
    pub elevated: bool,
    pub dry_run: bool,
    /// Flattened theme text written (or to be written) to `target_path`.
    pub conf: String,
}

/// Writes generated themes to disk.
pub struct Installer {
    config: InstallConfig,
    direct: Box<dyn PrivilegedWriter>,
    elevated: Box<dyn PrivilegedWriter>,
    prompt: Box<dyn ElevationPrompt>,
}

impl Installer {
    /// Installer using the filesystem and `sudo`.
    pub fn new(config: InstallConfig, prompt: Box<dyn ElevationPrompt>) -> Self {
        Self::with_writers(
            config,
            Box::new(DirectWriter),
            Box::new(SudoWriter::new()),
            prompt,
        )
    }

    pub fn with_writers(
        config: InstallConfig,
        direct: Box<dyn PrivilegedWriter>,
        elevated: Box<dyn PrivilegedWriter>,
        prompt: Box<dyn ElevationPrompt>,
    ) -> Self {
        Self {
            config,
            direct,
            elevated,
            prompt,
        }
    }

    pub fn json_path(&self, name: &ThemeName) -> PathBuf {
        self.config.json_dir.join(name.json_file_name())
    }

    pub fn target_path(&self, name: &ThemeName) -> PathBuf {
        self.config.target_dir.join(name.as_str())
    }

    /// Save `spec` as JSON, flatten it, and install it for Ghostty.
    ///
    /// Under [`OverwritePolicy::Keep`] an existing artifact fails the run
    /// before anything is written. If the install write fails, the JSON file
    /// stays behind as the only artifact.
    pub async fn install(
        &self,
        name: &ThemeName,
        spec: &ThemeSpec,
    ) -> Result<InstallReport, InstallError> {
        let json_path = self.json_path(name);
        let target_path = self.target_path(name);
        let json = spec.to_pretty_json()?;
        let conf = to_ghostty_conf(spec);

        if self.config.overwrite == OverwritePolicy::Keep {
            if self.direct.exists(&json_path).await.map_err(InstallError::Json)? {
                return Err(InstallError::AlreadyExists(json_path));
            }
            // Unknown existence fails the run; elevation must not overwrite.
            if self
                .direct
                .exists(&target_path)
                .await
                .map_err(InstallError::Install)?
            {
                return Err(InstallError::AlreadyExists(target_path));
            }
        }

        let mut report = InstallReport {
            json_path,
            target_path,
            installed: None,
            elevated: false,
            dry_run: self.config.dry_run,
            conf,
        };

        if self.config.dry_run {
            tracing::info!(
                json = %report.json_path.display(),
                target = %report.target_path.display(),
                "dry run; nothing written"
            );
            return Ok(report);
        }

        self.direct
            .write(&report.json_path, &json)
            .await
            .map_err(InstallError::Json)?;
        tracing::info!(path = %report.json_path.display(), "saved theme JSON");

        report.elevated = self.write_target(&report.target_path, &report.conf).await?;
        report.installed = Some(report.target_path.clone());
        tracing::info!(
            path = %report.target_path.display(),
            elevated = report.elevated,
            "installed theme"
        );
        Ok(report)
    }

    /// Write the flat theme, falling back to elevation on permission errors.
    /// Returns whether elevation was used.
    async fn write_target(&self, target: &Path, conf: &str) -> Result<bool, InstallError> {
        let err = match self.direct.write(target, conf).await {
            Ok(()) => return Ok(false),
            Err(err) => err,
        };
        if !err.is_permission_denied() {
            return Err(InstallError::Install(err));
        }
        tracing::warn!(path = %target.display(), "permission denied writing theme");

        let approved = match self.config.elevation {
            ElevationPolicy::Never => false,
            ElevationPolicy::Always => true,
            ElevationPolicy::Ask => self.prompt.confirm_elevation(target),
        };
        if !approved {
            return Err(InstallError::ElevationDeclined(target.to_path_buf()));
        }

        self.elevated
            .write(target, conf)
            .await
            .map_err(|e| match e {
                WriteError::Elevation(_) => InstallError::Install(e),
                other => InstallError::Install(WriteError::Elevation(other.to_string())),
            })?;
        Ok(true)
    }
}
