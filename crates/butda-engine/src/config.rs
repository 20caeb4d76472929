//! Configuration for the BUTDA client.
//!
//! Settings come from an optional JSON file (`.butda/config.json` by
//! default), then from the environment, then from built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::RESEARCH_PATH;

/// Base URL used when nothing else is configured (the local dev server).
pub const DEFAULT_API_URL: &str = "http://localhost:8001";

/// Variables that may supply the API base URL, in priority order.
pub const API_URL_ENV_VARS: [&str; 3] = ["BUTDA_API_URL", "API_URL", "VITE_API_URL"];

/// Config file location relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".butda/config.json";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the research API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Request timeout in seconds; no timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,

    /// Whether interactive sessions open with the welcome entry.
    #[serde(default = "default_welcome")]
    pub welcome: bool,
}

fn default_welcome() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout_seconds: None,
            welcome: default_welcome(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present. Environment overrides are applied last.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Override `api_url` with the first non-blank variable from
    /// [`API_URL_ENV_VARS`], as reported by `lookup`.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = API_URL_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
        {
            self.api_url = Some(url);
        }
    }

    /// The validated API base URL.
    pub fn api_url(&self) -> Result<&str, ConfigError> {
        let url = match &self.api_url {
            None => return Ok(DEFAULT_API_URL),
            Some(url) => url.trim(),
        };
        if url.is_empty() {
            return Err(ConfigError::MissingApiUrl);
        }
        let lowered = url.to_ascii_lowercase();
        if !(lowered.starts_with("http://") || lowered.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(url.to_owned()));
        }
        Ok(url)
    }

    /// Full URL of the research endpoint.
    pub fn research_endpoint(&self) -> Result<String, ConfigError> {
        Ok(construct_api_url(self.api_url()?, RESEARCH_PATH))
    }

    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// Join a base URL and an endpoint path with exactly one slash between them.
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The API URL was configured but left blank.
    #[error("api_url is empty")]
    MissingApiUrl,

    /// The API URL is not an http(s) URL.
    #[error("api_url must start with http:// or https://, got {0:?}")]
    InvalidApiUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.welcome);
        assert_eq!(config.api_url().unwrap(), DEFAULT_API_URL);
        assert_eq!(
            config.research_endpoint().unwrap(),
            "http://localhost:8001/api/research"
        );
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            api_url: Some("https://research.example.com/".into()),
            timeout_seconds: Some(30),
            welcome: false,
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io(_))));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_env_override_priority() {
        let mut config = Config {
            api_url: Some("http://from-file".into()),
            ..Config::default()
        };
        config.apply_env_overrides(lookup(&[
            ("API_URL", "http://generic"),
            ("VITE_API_URL", "http://vite"),
        ]));
        assert_eq!(config.api_url().unwrap(), "http://generic");

        config.apply_env_overrides(lookup(&[
            ("BUTDA_API_URL", "https://specific"),
            ("API_URL", "http://generic"),
        ]));
        assert_eq!(config.api_url().unwrap(), "https://specific");
    }

    #[test]
    fn test_blank_env_values_are_skipped() {
        let mut config = Config::default();
        config.apply_env_overrides(lookup(&[
            ("BUTDA_API_URL", "  "),
            ("VITE_API_URL", "http://vite:9000"),
        ]));
        assert_eq!(config.api_url().unwrap(), "http://vite:9000");

        let mut untouched = Config::default();
        untouched.apply_env_overrides(lookup(&[]));
        assert_eq!(untouched.api_url, None);
    }

    #[test]
    fn test_api_url_validation() {
        let blank = Config {
            api_url: Some(" ".into()),
            ..Config::default()
        };
        assert!(matches!(blank.api_url(), Err(ConfigError::MissingApiUrl)));

        let ftp = Config {
            api_url: Some("ftp://example.com".into()),
            ..Config::default()
        };
        assert!(matches!(ftp.api_url(), Err(ConfigError::InvalidApiUrl(_))));
        assert!(ftp.research_endpoint().is_err());
    }

    #[test]
    fn test_construct_api_url_normalizes_slashes() {
        assert_eq!(
            construct_api_url("http://host:8001", "api/research"),
            "http://host:8001/api/research"
        );
        assert_eq!(
            construct_api_url("http://host:8001///", "/api/research"),
            "http://host:8001/api/research"
        );
        assert_eq!(
            construct_api_url("https://host/prefix/", "api/research"),
            "https://host/prefix/api/research"
        );
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = Config {
            timeout_seconds: Some(0),
            ..Config::default()
        };
        assert_eq!(config.timeout(), None);
    }
}
