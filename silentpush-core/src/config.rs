// Connector asset configuration, loaded from a JSON file

use serde::Deserialize;
use silentpush_client::ClientConfig;
use silentpush_client::config::{DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/silentpush/config.json";

pub const API_KEY_ENV_VAR: &str = "SILENTPUSH_API_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No API key configured (set it in the config file or SILENTPUSH_API_KEY)")]
    MissingApiKey,
}

/// Settings the platform would hold for a configured SilentPush asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    pub server_url: String,
    pub api_key: Option<String>,
    pub verify_server_cert: bool,
    pub timeout_secs: u64,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            api_key: None,
            verify_server_cert: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ConnectorConfig {
    /// Load a config file; `~` in the path is expanded.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let path = expand_path(path);
        let shown = path.display().to_string();
        debug!(path = %shown, "loading connector config");

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: shown.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: shown,
            source,
        })
    }

    /// Like [`ConnectorConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if expand_path(path).exists() {
            Self::load(path)
        } else {
            debug!(path, "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Build the REST helper settings. A non-empty `api_key_override` wins
    /// over the file value.
    pub fn to_client_config(
        &self,
        api_key_override: Option<&str>,
    ) -> Result<ClientConfig, ConfigError> {
        let non_empty = |key: &str| {
            let key = key.trim();
            (!key.is_empty()).then(|| key.to_string())
        };
        let api_key = api_key_override
            .and_then(non_empty)
            .or_else(|| self.api_key.as_deref().and_then(non_empty))
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(ClientConfig::new(api_key)
            .with_server_url(self.server_url.clone())
            .with_timeout(self.timeout_secs)
            .with_verify_server_cert(self.verify_server_cert))
    }
}

pub fn expand_path(path: &str) -> PathBuf {
    Path::new(shellexpand::tilde(path).as_ref()).to_path_buf()
}
