//! Environment overrides applied on top of file configuration.
//!
//! `VIBEJAM_*` variables win over file values so one-off runs need no
//! config edits.

use std::path::PathBuf;

use crate::error::ConfigError;

use super::Config;

pub(super) const ENV_API_KEY: &str = "VIBEJAM_API_KEY";
pub(super) const ENV_BASE_URL: &str = "VIBEJAM_BASE_URL";
pub(super) const ENV_MODEL: &str = "VIBEJAM_MODEL";
pub(super) const ENV_API_TIMEOUT_SECS: &str = "VIBEJAM_API_TIMEOUT_SECS";
pub(super) const ENV_INSTALL_DIR: &str = "VIBEJAM_INSTALL_DIR";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty_env(env_lookup, ENV_BASE_URL) {
        config.api.base_url = url;
    }
    if let Some(model) = non_empty_env(env_lookup, ENV_MODEL) {
        config.api.model = model;
    }
    if let Some(timeout) = non_empty_env(env_lookup, ENV_API_TIMEOUT_SECS) {
        // Clamp to at least 1 second to avoid "no-timeout" accidental behavior.
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_API_TIMEOUT_SECS} value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        config.network.api_timeout_secs = parsed.max(1);
    }
    if let Some(dir) = non_empty_env(env_lookup, ENV_INSTALL_DIR) {
        config.install.target_dir = PathBuf::from(dir);
    }
    Ok(())
}

/// Return the runtime API key override, if set.
pub(super) fn api_key_override_with<FEnv>(env_lookup: &FEnv) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    non_empty_env(env_lookup, ENV_API_KEY)
}

fn non_empty_env<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
