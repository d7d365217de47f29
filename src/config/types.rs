//! Configuration data model.
//!
//! This module holds struct/enum definitions plus default values. Loading and
//! source resolution live in the sibling modules.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::defaults::{
    default_ghostty_themes_dir, DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, DEFAULT_JSON_DIR,
    DEFAULT_MODEL_ID,
};
use super::sources::ConfigSource;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Resolved API connection settings.
    pub api: ApiConfig,
    pub network: NetworkConfig,
    pub install: InstallConfig,
    pub display: DisplayConfig,
}

/// Resolved API connection settings used by the HTTP client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Empty when no key source produced a value.
    pub api_key: String,
    pub model: String,
    pub temperature: Option<f64>,
    /// Human-readable origin of `api_key`, used in error messages.
    pub api_key_source: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
            api_key: String::new(),
            model: DEFAULT_MODEL_ID.into(),
            temperature: None,
            api_key_source: String::new(),
        }
    }
}

/// Network/HTTP timeout policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Timeout for the model API request.
    pub api_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

/// What to do when an output file already exists.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Overwrite silently.
    #[default]
    Replace,
    /// Refuse to touch existing files.
    Keep,
}

/// Whether a permission-denied install may be retried with sudo.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ElevationPolicy {
    /// Ask on the terminal before retrying.
    #[default]
    Ask,
    /// Retry without asking.
    Always,
    /// Never retry; fail instead.
    Never,
}

impl FromStr for ElevationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ask" => Ok(Self::Ask),
            "always" | "yes" => Ok(Self::Always),
            "never" | "no" => Ok(Self::Never),
            other => Err(format!(
                "unknown elevation policy `{other}` (expected ask, always, or never)"
            )),
        }
    }
}

impl fmt::Display for ElevationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ask => "ask",
            Self::Always => "always",
            Self::Never => "never",
        })
    }
}

/// Installer settings under `[install]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Directory for `<name>.json` inspection copies.
    pub json_dir: PathBuf,
    /// Ghostty themes directory receiving `<name>`.
    pub target_dir: PathBuf,
    /// Render and report without writing anything.
    pub dry_run: bool,
    pub overwrite: OverwritePolicy,
    pub elevation: ElevationPolicy,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            json_dir: PathBuf::from(DEFAULT_JSON_DIR),
            target_dir: default_ghostty_themes_dir(),
            dry_run: false,
            overwrite: OverwritePolicy::Replace,
            elevation: ElevationPolicy::Ask,
        }
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// `[api]` table as written in the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(super) struct FileApiConfig {
    pub(super) base_url: String,
    pub(super) model: String,
    pub(super) api_key: String,
    pub(super) api_key_env: Option<String>,
    pub(super) api_key_file: Option<String>,
    pub(super) temperature: Option<f64>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
            model: DEFAULT_MODEL_ID.into(),
            api_key: String::new(),
            api_key_env: None,
            api_key_file: None,
            temperature: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub(super) api: FileApiConfig,
    pub(super) network: NetworkConfig,
    pub(super) install: InstallConfig,
    pub(super) display: DisplayConfig,
}

/// Configuration payload plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
