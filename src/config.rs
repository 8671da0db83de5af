//! Runtime configuration: optional TOML file plus environment overrides.
//!
//! The account list itself is never stored in the file; it always comes from
//! the [`ACCOUNTS_ENV`] variable.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tst_api::ApiConfig;

/// Multi-line account list, one `token` or `token|options` per line.
pub const ACCOUNTS_ENV: &str = "tst_tk_env";

/// Path to an optional TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "TST_CONFIG";

/// Webhook URL overriding `[notify].webhook_url`.
pub const WEBHOOK_ENV: &str = "TST_NOTIFY_WEBHOOK";

/// Subject of the batched notification.
pub const DEFAULT_NOTIFY_TITLE: &str = "塔斯汀签到脚本通知";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Vendor API client settings.
    pub api: ApiConfig,
    /// Where the end-of-run summary goes.
    pub notify: NotifyConfig,
}

/// Notification delivery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Endpoint receiving `{"title", "content"}` as JSON. No webhook means
    /// the summary is only logged.
    pub webhook_url: Option<String>,
    /// Subject line of the summary.
    pub title: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            title: DEFAULT_NOTIFY_TITLE.to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::CheckinError::Config(e.to_string()))
    }

    /// Load configuration the way the binary does.
    ///
    /// Reads the file named by [`CONFIG_PATH_ENV`] when set, then applies
    /// [`WEBHOOK_ENV`] on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file cannot be loaded.
    pub fn load() -> crate::error::Result<Self> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(std::env::var(WEBHOOK_ENV).ok());
        Ok(config)
    }

    /// Apply a webhook override; blank values are ignored.
    pub fn apply_overrides(&mut self, webhook_url: Option<String>) {
        if let Some(url) = webhook_url.filter(|u| !u.trim().is_empty()) {
            self.notify.webhook_url = Some(url.trim().to_owned());
        }
    }
}

/// Raw account list from the environment; empty when unset.
pub fn accounts_from_env() -> String {
    std::env::var(ACCOUNTS_ENV).unwrap_or_default()
}
