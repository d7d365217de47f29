//! Configuration loading from TOML files, `.env` files, and environment
//! variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`VIBEJAM_API_KEY`, `VIBEJAM_BASE_URL`,
//!    `VIBEJAM_MODEL`, `VIBEJAM_API_TIMEOUT_SECS`, `VIBEJAM_INSTALL_DIR`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./vibejam.toml in the current directory
//! 4. $XDG_CONFIG_HOME/vibejam/vibejam.toml (or ~/.config/vibejam/vibejam.toml)
//! 5. Built-in defaults
//!
//! `.env` files only feed variable lookups and never override the real
//! environment.

use crate::error::ConfigError;
use std::path::PathBuf;

mod defaults;
mod dotenv;
mod env;
mod loader;
mod resolve;
mod sources;
mod types;

use defaults::PLACEHOLDER_API_KEY;
pub use defaults::{default_ghostty_themes_dir, DEFAULT_CONFIG_TEMPLATE};
pub use dotenv::DotenvVars;
pub use loader::{load_config, load_config_with_source};
pub use sources::ConfigSource;
use types::{FileApiConfig, FileConfig};
pub use types::{
    ApiConfig, Config, DisplayConfig, ElevationPolicy, InstallConfig, LoadedConfig,
    NetworkConfig, OverwritePolicy,
};

impl ApiConfig {
    /// Return the API key, or fail before any network call is made.
    pub fn require_key(&self) -> Result<&str, ConfigError> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Err(ConfigError::MissingApiKey(format!(
                "`{}` is not set. Export it, or add `{}=your_actual_key` to ./.env or ~/vibejam/.env.",
                self.api_key_source,
                self.api_key_source_var()
            )));
        }
        if key.contains(PLACEHOLDER_API_KEY) {
            return Err(ConfigError::MissingApiKey(format!(
                "placeholder key detected in `{}`; replace {PLACEHOLDER_API_KEY} with your actual key.",
                self.api_key_source
            )));
        }
        Ok(key)
    }

    /// Variable name to suggest in messages when the source is an env var.
    fn api_key_source_var(&self) -> &str {
        let is_env_name = !self.api_key_source.is_empty()
            && self
                .api_key_source
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        if is_env_name {
            &self.api_key_source
        } else {
            "OPENAI_API_KEY"
        }
    }
}

impl Config {
    /// Check the settings a generation run cannot proceed without.
    pub fn validate_for_generation(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "no API base URL configured; set api.base_url or VIBEJAM_BASE_URL".to_string(),
            ));
        }
        if self.api.model.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "no model configured; set api.model or VIBEJAM_MODEL".to_string(),
            ));
        }
        self.api.require_key()?;
        Ok(())
    }
}

/// Root directory for per-user config (`$XDG_CONFIG_HOME` or `~/.config`).
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
