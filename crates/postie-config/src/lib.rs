//! Configuration management for postie.
//!
//! Parses `postie.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Credential-bearing values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `oschina.base_url`
//! - `oschina.cookie`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override OSChina space URL.
    pub base_url: Option<String>,
    /// Override OSChina session cookie.
    pub cookie: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "postie.toml";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OSChina configuration.
    pub oschina: Option<OschinaConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// OSChina configuration.
#[derive(Debug, Deserialize)]
pub struct OschinaConfig {
    /// Personal space URL, e.g. `https://my.oschina.net/u/1234567`.
    pub base_url: String,
    /// Session cookie copied from a logged-in browser.
    pub cookie: String,
    /// User agent sent with every request.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl OschinaConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "oschina.base_url")?;
        require_http_url(&self.base_url, "oschina.base_url")?;
        require_non_empty(&self.cookie, "oschina.cookie")?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "oschina.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`oschina.cookie`").
        field: String,
        /// Error message (e.g., "${`OSCHINA_COOKIE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `postie.toml` in current directory and parents,
    /// falling back to an empty configuration.
    ///
    /// Sections are not validated here: CLI settings may still fill in
    /// missing values. Use [`Config::require_oschina`] to get a validated section.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    ///
    /// A cookie override without a `[oschina]` section only takes effect
    /// when a base URL override is given too.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if self.oschina.is_none()
            && let (Some(base_url), Some(cookie)) = (&settings.base_url, &settings.cookie)
        {
            self.oschina = Some(OschinaConfig {
                base_url: base_url.clone(),
                cookie: cookie.clone(),
                user_agent: None,
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            });
            return;
        }

        if let Some(oschina) = self.oschina.as_mut() {
            if let Some(base_url) = &settings.base_url {
                oschina.base_url.clone_from(base_url);
            }
            if let Some(cookie) = &settings.cookie {
                oschina.cookie.clone_from(cookie);
            }
        }
    }

    /// Get validated OSChina configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_oschina(&self) -> Result<&OschinaConfig, ConfigError> {
        let conf = self.oschina.as_ref().ok_or_else(|| {
            ConfigError::Validation("[oschina] section required in config".into())
        })?;
        conf.validate()?;
        Ok(conf)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut oschina) = self.oschina {
            oschina.base_url = expand::expand_env(&oschina.base_url, "oschina.base_url")?;
            oschina.cookie = expand::expand_env(&oschina.cookie, "oschina.cookie")?;
        }
        Ok(())
    }
}
