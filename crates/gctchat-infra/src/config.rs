//! Global configuration loader for GCT Chat.
//!
//! Reads `config.toml` from the data directory (`~/.gctchat/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to defaults when the
//! file is missing or malformed. Environment overrides are applied on top.

use std::path::Path;

use gctchat_types::config::GlobalConfig;

use crate::filesystem::config_path;

/// Environment variable holding the health server port.
pub const SERVER_PORT_ENV: &str = "SERVER_PORT";

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Apply process environment overrides (`SERVER_PORT`).
pub fn apply_env_overrides(config: GlobalConfig) -> GlobalConfig {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`. Unparsable values are ignored.
pub fn apply_overrides_from(
    mut config: GlobalConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> GlobalConfig {
    if let Some(raw) = lookup(SERVER_PORT_ENV) {
        match raw.trim().parse::<u16>() {
            Ok(port) => config.server.port = port,
            Err(err) => {
                tracing::warn!("Ignoring {SERVER_PORT_ENV}={raw:?}: {err}");
            }
        }
    }
    config
}
