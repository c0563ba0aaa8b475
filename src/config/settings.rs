// Configuration structs

use serde::{Deserialize, Serialize};

/// Default Lucifer server address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11666";

/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Connection settings for the Lucifer server
    pub client: ClientConfig,
}

/// Settings used to build the HTTP client for one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://127.0.0.1:11666")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Always REQUEST_TIMEOUT_SECS; not read from the config file.
    #[serde(skip, default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    REQUEST_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:11666");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_timeout_is_not_configurable() {
        let config: ClientConfig =
            toml::from_str("base_url = \"http://localhost:9\"\ntimeout_seconds = 60\n").unwrap();
        assert_eq!(config.base_url, "http://localhost:9");
        assert_eq!(config.timeout_seconds, REQUEST_TIMEOUT_SECS);
    }
}
