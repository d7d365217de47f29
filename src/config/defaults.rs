//! Default configuration constants.
//!
//! Keeping defaults in one module lets config types, the loader, and tests
//! share the same literals.

use std::path::PathBuf;

/// Embedded default `vibejam.toml` template.
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/vibejam.toml");
/// Config file name searched locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "vibejam.toml";
/// Directory under the config root holding `vibejam.toml`.
pub(super) const CONFIG_DIR_NAME: &str = "vibejam";
/// Default OpenAI-compatible API base URL.
pub(super) const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
/// Default model id; needs JSON-mode support.
pub(super) const DEFAULT_MODEL_ID: &str = "gpt-4o";
/// Env var consulted when no key source is configured.
pub(super) const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Default timeout for model API requests.
pub(super) const DEFAULT_API_TIMEOUT_SECS: u64 = 120;
/// Project-relative directory for inspection JSON files.
pub(super) const DEFAULT_JSON_DIR: &str = "themes/ghostty";
/// Ghostty's bundled themes directory inside the macOS app bundle.
pub(super) const MACOS_GHOSTTY_THEMES_DIR: &str =
    "/Applications/Ghostty.app/Contents/Resources/ghostty/themes";
/// Marker left in sample `.env` files instead of a real key.
pub(super) const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Ghostty themes directory for the current platform.
///
/// macOS installs into the app bundle; elsewhere the per-user
/// `$XDG_CONFIG_HOME/ghostty/themes` directory is used.
pub fn default_ghostty_themes_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        return PathBuf::from(MACOS_GHOSTTY_THEMES_DIR);
    }
    super::config_root_dir()
        .map(|dir| dir.join("ghostty").join("themes"))
        .unwrap_or_else(|| PathBuf::from(".config/ghostty/themes"))
}
