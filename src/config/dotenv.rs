//! `.env` file support.
//!
//! Values are kept in a side table instead of being exported into the process
//! environment; real environment variables always win over file values, and
//! earlier files win over later ones.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::CONFIG_DIR_NAME;

/// Variables collected from `.env` files.
#[derive(Debug, Clone, Default)]
pub struct DotenvVars {
    vars: BTreeMap<String, String>,
    loaded: Vec<PathBuf>,
}

impl DotenvVars {
    /// Load `./.env`, `~/vibejam/.env`, then `<config root>/vibejam/.env`.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_from(&dotenv_candidates(
            dirs::home_dir(),
            super::config_root_dir(),
        ))
    }

    /// Load every existing file in `candidates`; missing files are skipped.
    pub fn load_from(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut out = Self::default();
        for path in candidates {
            if !path.is_file() {
                continue;
            }
            out.merge_file(path)?;
        }
        Ok(out)
    }

    fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let entries = dotenvy::from_path_iter(path).map_err(|e| dotenv_error(path, e))?;
        for entry in entries {
            let (key, value) = entry.map_err(|e| dotenv_error(path, e))?;
            self.vars.entry(key).or_insert(value);
        }
        tracing::debug!(path = %path.display(), "loaded .env file");
        self.loaded.push(path.to_path_buf());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    /// Files that contributed values, in load order.
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded
    }
}

fn dotenv_error(path: &Path, err: dotenvy::Error) -> ConfigError {
    ConfigError::Invalid(format!("failed to read {}: {err}", path.display()))
}

pub(super) fn dotenv_candidates(
    home: Option<PathBuf>,
    config_root: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(home) = home {
        candidates.push(home.join(CONFIG_DIR_NAME).join(".env"));
    }
    if let Some(root) = config_root {
        candidates.push(root.join(CONFIG_DIR_NAME).join(".env"));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;

    #[test]
    fn earlier_files_win_and_missing_files_are_skipped() {
        let dir = TestTempDir::new("dotenv");
        let first = dir.write_text("a/.env", "OPENAI_API_KEY=sk-first\nEXTRA=1\n");
        let second = dir.write_text("b/.env", "OPENAI_API_KEY=sk-second\nOTHER=2\n");
        let missing = dir.child("c/.env");

        let vars = DotenvVars::load_from(&[missing, first.clone(), second.clone()]).unwrap();
        assert_eq!(vars.get("OPENAI_API_KEY").as_deref(), Some("sk-first"));
        assert_eq!(vars.get("OTHER").as_deref(), Some("2"));
        assert_eq!(vars.loaded_files(), &[first, second]);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = TestTempDir::new("dotenv-bad");
        let bad = dir.write_text(".env", "NOT VALID LINE WITHOUT EQUALS\n");
        let err = DotenvVars::load_from(&[bad]).unwrap_err();
        assert!(err.to_string().contains("failed to read"), "got: {err}");
    }

    #[test]
    fn candidates_cover_cwd_home_and_config_root() {
        let candidates = dotenv_candidates(
            Some(PathBuf::from("/home/u")),
            Some(PathBuf::from("/home/u/.config")),
        );
        assert_eq!(
            candidates,
            vec![
                PathBuf::from(".env"),
                PathBuf::from("/home/u/vibejam/.env"),
                PathBuf::from("/home/u/.config/vibejam/.env"),
            ]
        );
    }
}
