// Configuration loader
// Loads client settings from ~/.lucifer/config.toml, falling back to defaults

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::{ClientConfig, Config};
use crate::errors;

/// Location of the optional config file
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lucifer/config.toml"))
}

/// Load configuration from the Lucifer config file, or defaults if there is none
pub fn load_config() -> Result<Config> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("Could not determine home directory, using default config");
            Ok(Config::default())
        }
    }
}

/// Load configuration from an explicit path. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    #[derive(serde::Deserialize)]
    struct TomlConfig {
        #[serde(default)]
        client: Option<ClientConfig>,
    }

    let toml_config: TomlConfig = toml::from_str(&contents)
        .map_err(|e| anyhow!(errors::config_parse_error(&e.to_string())))
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    let config = Config {
        client: toml_config.client.unwrap_or_default(),
    };
    tracing::debug!(base_url = %config.client.base_url, "Loaded config file");

    Ok(config)
}
