//! Config-file to runtime-config resolution.

use crate::error::ConfigError;

use super::defaults::{DEFAULT_API_BASE_URL, DEFAULT_API_KEY_ENV, DEFAULT_MODEL_ID};
use super::env::ENV_API_KEY;
use super::{ApiConfig, Config, FileApiConfig, FileConfig};

pub(super) fn resolve_config_from_file_config<FEnv, FRead>(
    parsed: FileConfig,
    key_override: Option<String>,
    env_lookup: FEnv,
    read_file: FRead,
) -> Result<Config, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
    FRead: Fn(&str) -> Result<String, ConfigError>,
{
    let api = resolve_api_with(&parsed.api, key_override, env_lookup, read_file)?;
    let mut network = parsed.network;
    network.api_timeout_secs = network.api_timeout_secs.max(1);
    Ok(Config {
        api,
        network,
        install: parsed.install,
        display: parsed.display,
    })
}

pub(super) fn resolve_api_with<FEnv, FRead>(
    file: &FileApiConfig,
    key_override: Option<String>,
    env_lookup: FEnv,
    read_file: FRead,
) -> Result<ApiConfig, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
    FRead: Fn(&str) -> Result<String, ConfigError>,
{
    if let Some(temperature) = file.temperature {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::Invalid(format!(
                "api.temperature `{temperature}` must be between 0.0 and 2.0"
            )));
        }
    }

    let (api_key, api_key_source) = resolve_api_key(file, key_override, env_lookup, read_file)?;
    Ok(ApiConfig {
        base_url: normalized_string(&file.base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        api_key,
        model: normalized_string(&file.model).unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
        temperature: file.temperature,
        api_key_source,
    })
}

/// Resolve the API key and describe where it came from.
///
/// Resolution order:
/// 1. `VIBEJAM_API_KEY` override.
/// 2. The one configured source (`api_key`, `api_key_env`, `api_key_file`).
/// 3. `OPENAI_API_KEY` when nothing is configured.
pub(super) fn resolve_api_key<FEnv, FRead>(
    file: &FileApiConfig,
    key_override: Option<String>,
    env_lookup: FEnv,
    read_file: FRead,
) -> Result<(String, String), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
    FRead: Fn(&str) -> Result<String, ConfigError>,
{
    validate_api_key_sources(file)?;

    if let Some(key) = key_override {
        return Ok((key.trim().to_string(), ENV_API_KEY.to_string()));
    }

    if let Some(path) = normalized_option(&file.api_key_file) {
        let key = read_file(&path)?.trim().to_string();
        return Ok((key, format!("api.api_key_file `{path}`")));
    }

    if let Some(key) = normalized_string(&file.api_key) {
        return Ok((key, "api.api_key".to_string()));
    }

    let env_name =
        normalized_option(&file.api_key_env).unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
    let key = env_lookup(&env_name).unwrap_or_default().trim().to_string();
    Ok((key, env_name))
}

fn validate_api_key_sources(file: &FileApiConfig) -> Result<(), ConfigError> {
    let mut configured = Vec::new();
    if normalized_string(&file.api_key).is_some() {
        configured.push("api_key");
    }
    if normalized_option(&file.api_key_env).is_some() {
        configured.push("api_key_env");
    }
    if normalized_option(&file.api_key_file).is_some() {
        configured.push("api_key_file");
    }
    if configured.len() > 1 {
        return Err(ConfigError::Invalid(format!(
            "only one of api.api_key, api.api_key_env, and api.api_key_file may be set (found: {})",
            configured.join(", ")
        )));
    }
    Ok(())
}

pub(super) fn normalized_option(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(normalized_string)
}

pub(super) fn normalized_string(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
