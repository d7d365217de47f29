//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::dotenv::DotenvVars;
use super::env::{api_key_override_with, apply_runtime_env_overrides};
use super::resolve::resolve_config_from_file_config;
use super::sources::read_config_text_with_sources;
use super::{config_root_dir, Config, FileConfig, LoadedConfig};

/// Load configuration from disk, `.env` files, and the environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_with_source(path_override)?.config)
}

/// Load configuration and report which file it came from.
pub fn load_config_with_source(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    let dotenv = DotenvVars::load_default()?;
    for path in dotenv.loaded_files() {
        tracing::debug!(path = %path.display(), "loaded .env file");
    }
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok().or_else(|| dotenv.get(name)),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = resolve_config_from_file_config(
        parsed,
        api_key_override_with(&env_lookup),
        &env_lookup,
        |path| {
            read_file(Path::new(path)).map_err(|e| {
                ConfigError::Invalid(format!("failed to read api.api_key_file `{path}`: {e}"))
            })
        },
    )?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;

    Ok(LoadedConfig { config, source })
}
