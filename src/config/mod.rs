//! Configuration management module
//!
//! Provides configuration management with:
//! - TOML-based configuration files
//! - Environment variable overrides for the API base URL
//! - Validation

use serde::{Deserialize, Serialize};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};
use tokio::fs;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{AppError, AppResult};

/// Fallback API base URL when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Environment variables consulted for the API base URL, highest priority first
pub const API_URL_ENV_VARS: [&str; 2] = ["REFER_EARN_API_URL", "NEXT_PUBLIC_API_URL"];

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Referrals API settings
    pub api: ApiConfig,
    /// UI configuration
    pub ui: UIConfig,
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. `explicit` path, when given (a missing file is an error)
    /// 2. ./refer-earn.toml
    /// 3. ~/.config/refer-earn/config.toml
    /// 4. Default configuration
    ///
    /// Only a missing default-location file falls through to the next
    /// candidate; unreadable or malformed files are errors. Environment
    /// overrides are applied on top of whichever source won, then the
    /// result is validated.
    pub async fn load(explicit: Option<&Path>) -> AppResult<Self> {
        info!("Loading application configuration");

        let mut config = match explicit {
            Some(path) => Self::load_from_file(path).await?,
            None => Self::load_from_candidates(&Self::default_search_paths()).await?,
        };

        config.apply_env_overrides();
        config.validate()?;

        info!("Referrals API base URL: {}", config.api.base_url);
        Ok(config)
    }

    /// Candidate files consulted when no explicit path is given
    pub fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("./refer-earn.toml")];
        paths.extend(Self::get_user_config_path());
        paths
    }

    /// Load the first candidate that exists, or the defaults when none does
    pub async fn load_from_candidates(paths: &[PathBuf]) -> AppResult<Self> {
        for path in paths {
            match Self::load_from_file(path).await {
                Ok(config) => {
                    info!("Loaded configuration from {}", path.display());
                    return Ok(config);
                }
                Err(AppError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                    debug!("No configuration at {}", path.display());
                }
                Err(e) => {
                    warn!("Rejecting configuration at {}: {}", path.display(), e);
                    return Err(e);
                }
            }
        }

        info!("Using default configuration");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    ///
    /// The result is not validated here; [`Config::load`] validates after
    /// environment overrides are applied.
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from: {}", path.display());

        let content = fs::read_to_string(path).await?;

        toml::from_str(&content).map_err(|e| {
            AppError::config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Save configuration to a file
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        let path = path.as_ref();
        debug!("Saving configuration to: {}", path.display());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content).await?;

        info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides using a custom variable lookup
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let found = API_URL_ENV_VARS.iter().copied().find_map(|key| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(|v| (key, v))
        });

        if let Some((key, value)) = found {
            debug!("API base URL overridden by {}", key);
            self.api.base_url = value.trim().to_string();
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> AppResult<()> {
        debug!("Validating configuration");

        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(AppError::config("api.base_url must not be empty"));
        }

        let parsed = Url::parse(base_url)
            .map_err(|e| AppError::config(format!("api.base_url is not a valid URL: {}", e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::config("api.base_url must use http or https"));
        }

        if self.api.timeout_ms == 0 {
            return Err(AppError::config("api.timeout_ms must be greater than 0"));
        }

        if self.ui.auto_close_ms == 0 {
            return Err(AppError::config("ui.auto_close_ms must be greater than 0"));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(AppError::config("ui.tick_rate_ms must be greater than 0"));
        }

        debug!("Configuration validation passed");
        Ok(())
    }

    /// Get user configuration directory path
    fn get_user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("refer-earn");
            path.push("config.toml");
            path
        })
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application name
    pub name: String,
    /// Application version
    pub version: String,
    /// Log level used when RUST_LOG is unset
    pub log_level: String,
    /// Log file used while the terminal UI owns the screen
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Refer & Earn".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: if cfg!(debug_assertions) {
                "debug"
            } else {
                "info"
            }
            .to_string(),
            log_file: PathBuf::from("refer-earn.log"),
        }
    }
}

/// Referrals API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; requests go to `{base_url}/api/referrals`
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// User agent sent with each request
    pub user_agent: String,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_ms: 10_000,
            user_agent: format!("refer-earn/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    /// Theme name
    pub theme: String,
    /// Delay before the modal closes itself after a successful submission
    pub auto_close_ms: u64,
    /// Input poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl UIConfig {
    pub fn auto_close_delay(&self) -> Duration {
        Duration::from_millis(self.auto_close_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            auto_close_ms: 2000,
            tick_rate_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.ui.auto_close_delay(), Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override_priority() {
        let mut config = Config::default();
        config.apply_env_overrides_from(|key| match key {
            "REFER_EARN_API_URL" => Some("https://api.example.com".to_string()),
            "NEXT_PUBLIC_API_URL" => Some("https://legacy.example.com".to_string()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "https://api.example.com");
    }

    #[test]
    fn test_legacy_env_var_and_blank_values() {
        let mut config = Config::default();
        config.apply_env_overrides_from(|key| match key {
            "REFER_EARN_API_URL" => Some("   ".to_string()),
            "NEXT_PUBLIC_API_URL" => Some("https://legacy.example.com".to_string()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "https://legacy.example.com");

        let mut untouched = Config::default();
        untouched.apply_env_overrides_from(|_| None);
        assert_eq!(untouched.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.ui.auto_close_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.api.timeout_ms = 0;
        assert!(config.validate().is_err());
    }
}
