//! Config file parsing and validation.
//!
//! The config file is optional. Every key has a default and the whole file
//! can be absent:
//!
//! ```toml
//! [github]
//! api_base_url = "https://api.github.com"
//! user_agent = "gistr"
//! timeout_seconds = 30
//! ```

use crate::api_defaults::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT, GITHUB_API_BASE_URL};
use crate::error::GistError;
use crate::log_debug;
use crate::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const CONFIG_PATH: &str = ".config/gistr/config.toml";
pub const API_BASE_URL_ENV_VAR: &str = "GISTR_API_BASE_URL";

pub trait ConfigProperties {
    fn api_base_url(&self) -> &str {
        GITHUB_API_BASE_URL
    }
    fn user_agent(&self) -> &str {
        DEFAULT_USER_AGENT
    }
    fn timeout_seconds(&self) -> u64 {
        DEFAULT_TIMEOUT_SECONDS
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    github: GithubSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GithubSection {
    api_base_url: Option<String>,
    user_agent: Option<String>,
    timeout_seconds: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    api_base_url: String,
    user_agent: String,
    timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: GITHUB_API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Parse config data in TOML format. Missing keys take their defaults.
    pub fn from_toml(data: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(data).map_err(|err| GistError::ConfigurationError(err.to_string()))?;
        let defaults = Config::default();
        let github = file.github;
        let config = Config {
            api_base_url: github
                .api_base_url
                .map(|url| normalize_base_url(&url))
                .unwrap_or(defaults.api_base_url),
            user_agent: github.user_agent.unwrap_or(defaults.user_agent),
            timeout_seconds: github.timeout_seconds.unwrap_or(defaults.timeout_seconds),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = normalize_base_url(url);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            return Err(GistError::ConfigurationError("api_base_url cannot be empty".into()).into());
        }
        if self.user_agent.trim().is_empty() {
            return Err(GistError::ConfigurationError("user_agent cannot be empty".into()).into());
        }
        if self.timeout_seconds == 0 {
            return Err(GistError::ConfigurationError(
                "timeout_seconds must be greater than 0".into(),
            )
            .into());
        }
        Ok(())
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Where the configuration is read from. An explicit path must exist, the
/// default location under `$HOME` may be missing.
#[derive(Clone, Debug)]
pub enum ConfigFilePath {
    Explicit(PathBuf),
    Default(PathBuf),
    None,
}

impl ConfigFilePath {
    pub fn new(explicit: Option<&str>) -> Self {
        match explicit {
            Some(path) => ConfigFilePath::Explicit(PathBuf::from(path)),
            None => match std::env::var("HOME") {
                Ok(home) => ConfigFilePath::Default(Path::new(&home).join(CONFIG_PATH)),
                Err(_) => ConfigFilePath::None,
            },
        }
    }
}

/// Load the configuration and apply environment overrides on top.
pub fn read_config(path: ConfigFilePath) -> Result<Config> {
    let config = match path {
        ConfigFilePath::Explicit(path) => {
            let data = fs::read_to_string(&path).map_err(|err| {
                GistError::ConfigurationError(format!("{}: {}", path.display(), err))
            })?;
            Config::from_toml(&data)?
        }
        ConfigFilePath::Default(path) => {
            if path.exists() {
                let data = fs::read_to_string(&path).map_err(|err| {
                    GistError::ConfigurationError(format!("{}: {}", path.display(), err))
                })?;
                Config::from_toml(&data)?
            } else {
                log_debug!("No config file at {}, using defaults", path.display());
                Config::default()
            }
        }
        ConfigFilePath::None => Config::default(),
    };
    let config = match std::env::var(API_BASE_URL_ENV_VAR) {
        Ok(url) if !url.trim().is_empty() => {
            log_debug!("Using {} from {}", url, API_BASE_URL_ENV_VAR);
            config.with_api_base_url(&url)
        }
        _ => config,
    };
    config.validate()?;
    Ok(config)
}

impl ConfigProperties for Config {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl ConfigProperties for Arc<Config> {
    fn api_base_url(&self) -> &str {
        self.as_ref().api_base_url()
    }

    fn user_agent(&self) -> &str {
        self.as_ref().user_agent()
    }

    fn timeout_seconds(&self) -> u64 {
        self.as_ref().timeout_seconds()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(Config::default(), config);
        assert_eq!("https://api.github.com", config.api_base_url());
        assert_eq!("gistr", config.user_agent());
        assert_eq!(30, config.timeout_seconds());
    }

    #[test]
    fn test_all_keys_set() {
        let config_data = r#"
        [github]
        api_base_url = "https://github.example.com/api/v3/"
        user_agent = "my-agent"
        timeout_seconds = 5
        "#;
        let config = Config::from_toml(config_data).unwrap();
        assert_eq!("https://github.example.com/api/v3", config.api_base_url());
        assert_eq!("my-agent", config.user_agent());
        assert_eq!(5, config.timeout_seconds());
    }

    #[test]
    fn test_partial_config_keeps_remaining_defaults() {
        let config_data = r#"
        # only timeouts
        [github]
        timeout_seconds = 10
        "#;
        let config = Config::from_toml(config_data).unwrap();
        assert_eq!("https://api.github.com", config.api_base_url());
        assert_eq!(10, config.timeout_seconds());
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let err = Config::from_toml("[github\napi_base_url = ").unwrap_err();
        let err = err.downcast_ref::<GistError>().unwrap();
        assert!(matches!(err, GistError::ConfigurationError(_)));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let config_data = r#"
        [github]
        api_token = "1234"
        "#;
        assert!(Config::from_toml(config_data).is_err());
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let config_data = r#"
        [github]
        timeout_seconds = 0
        "#;
        assert!(Config::from_toml(config_data).is_err());
    }

    #[test]
    fn test_empty_user_agent_is_error() {
        let config_data = r#"
        [github]
        user_agent = "  "
        "#;
        assert!(Config::from_toml(config_data).is_err());
    }

    #[test]
    fn test_with_api_base_url_strips_trailing_slash() {
        let config = Config::default().with_api_base_url("http://localhost:8080/");
        assert_eq!("http://localhost:8080", config.api_base_url());
    }

    #[test]
    fn test_arc_config_delegates() {
        let config = Arc::new(Config::default().with_api_base_url("http://localhost"));
        assert_eq!("http://localhost", config.api_base_url());
        assert_eq!("gistr", ConfigProperties::user_agent(&config));
    }

    #[test]
    fn test_explicit_config_path() {
        match ConfigFilePath::new(Some("/tmp/gistr.toml")) {
            ConfigFilePath::Explicit(path) => assert_eq!(PathBuf::from("/tmp/gistr.toml"), path),
            _ => panic!("Expected explicit config path"),
        }
    }
}
