use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.into()
}

fn default_request_timeout_ms() -> u64 {
    5000
}

fn default_poll_interval_ms() -> u64 {
    1000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Config {
    /// Build the configuration from defaults and the `API_URL` environment variable
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable substitution
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text, expanding `$(VAR)` and `${VAR}` placeholders
    pub fn from_yaml(content: &str) -> Result<Self> {
        let expanded = expand_env_vars(content)?;

        let mut config: Config = serde_yaml::from_str(&expanded)?;
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;

        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.dashboard.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.api.request_timeout_ms)
    }

    fn apply_env_overrides(&mut self) {
        // API_URL wins over whatever the file had; empty means unset
        if let Ok(url) = std::env::var("API_URL") {
            if !url.trim().is_empty() {
                self.api.base_url = url;
            }
        }
    }

    fn normalize(&mut self) {
        self.api.base_url = self.api.base_url.trim().trim_end_matches('/').to_string();
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        let url = &self.api.base_url;
        if url.is_empty() {
            return Err(AppError::Config("API base URL cannot be empty".to_string()));
        }

        let host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"));
        match host {
            Some(rest) if !rest.is_empty() => {}
            _ => {
                return Err(AppError::Config(format!(
                    "API base URL must be an http(s) URL, got: {}",
                    url
                )));
            }
        }

        if self.api.request_timeout_ms == 0 {
            return Err(AppError::Config(
                "Request timeout cannot be 0".to_string(),
            ));
        }

        if self.dashboard.poll_interval_ms == 0 {
            return Err(AppError::Config("Poll interval cannot be 0".to_string()));
        }

        Ok(())
    }
}

/// Expand environment variables in the format $(VAR_NAME) or ${VAR_NAME}
fn expand_env_vars(content: &str) -> Result<String> {
    let re = regex::Regex::new(r"\$(?:\(([A-Z_][A-Z0-9_]*)\)|\{([A-Z_][A-Z0-9_]*)\})")
        .map_err(|e| AppError::Config(e.to_string()))?;

    let expanded = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();

        // Leave unknown placeholders untouched
        std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
    });

    Ok(expanded.into_owned())
}
