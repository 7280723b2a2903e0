//! Application configuration
//!
//! Limits for the Theory of Change form, the login rules and where things live
//! (remote API, browser storage keys). Values are fixed at build time; the API
//! base URL can be overridden with the `TOC_API_BASE_URL` environment variable
//! when compiling.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::warn;

/// Hard cap on every editable project attribute, in characters
pub const MAX_CHARS: usize = 200;
/// Length at which the "approaching character limit" warning appears
pub const WARNING_THRESHOLD: usize = 180;
/// Minimum password length for both sign in and registration
pub const MIN_PASSWORD_LEN: usize = 6;

const DEFAULT_API_BASE_URL: &str = "/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the remote authentication API, without trailing slash
    pub api_base_url: String,
    pub form: FormConfig,
    pub storage: StorageKeys,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    pub max_chars: usize,
    pub warning_threshold: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageKeys {
    pub project: String,
    pub session: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_chars: MAX_CHARS,
            warning_threshold: WARNING_THRESHOLD,
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            project: "toc_project".to_string(),
            session: "toc_session".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        let api_base_url = option_env!("TOC_API_BASE_URL")
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base_url,
            form: FormConfig::default(),
            storage: StorageKeys::default(),
        }
    }

    /// Full URL for an API path such as `/auth/login`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.form.max_chars == 0 {
            return Err("max_chars must be greater than 0".to_string());
        }

        if self.form.warning_threshold >= self.form.max_chars {
            return Err(format!(
                "warning_threshold ({}) must be below max_chars ({})",
                self.form.warning_threshold, self.form.max_chars
            ));
        }

        if self.storage.project.is_empty() || self.storage.session.is_empty() {
            return Err("storage keys must not be empty".to_string());
        }

        if self.storage.project == self.storage.session {
            return Err("project and session storage keys must differ".to_string());
        }

        Ok(())
    }
}

static GLOBAL_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the global configuration. Limits and storage keys fall back to their
/// defaults if they do not validate.
pub fn get_global_config() -> AppConfig {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = AppConfig::new();
            if let Err(e) = config.validate() {
                warn!("Invalid configuration: {}", e);
                AppConfig {
                    api_base_url: config.api_base_url,
                    form: FormConfig::default(),
                    storage: StorageKeys::default(),
                }
            } else {
                config
            }
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.form.max_chars, 200);
        assert_eq!(config.form.warning_threshold, 180);
    }

    #[test]
    fn test_invalid_limits_rejected() {
        let mut config = AppConfig::default();
        config.form.warning_threshold = 200;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.form.max_chars = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.storage.session = config.storage.project.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let config = AppConfig {
            api_base_url: "https://api.example.org".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.endpoint("/auth/login"), "https://api.example.org/auth/login");
        assert_eq!(config.endpoint("auth/register"), "https://api.example.org/auth/register");
    }
}
