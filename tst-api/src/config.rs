//! Client configuration with sensible defaults.
//!
//! [`ApiConfig`] controls where requests go, how often they are retried,
//! and which User-Agent is presented. The defaults reproduce what the
//! vendor's mini-program sends.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://sss-web.tastientech.com";

/// User-Agent of the WeChat mini-program. The vendor rejects requests that
/// do not look like they come from it, so this must stay verbatim.
pub const MINI_PROGRAM_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36 MicroMessenger/7.0.20.1781(0x6700143B) NetType/WIFI MiniProgramEnv/Windows WindowsWechat/WMPF WindowsWechat(0x63090a13) UnifiedPCWindowsWechat(0xf254032b) XWEB/13655";

/// Configuration for the vendor API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and host of the vendor API, without a trailing path.
    pub base_url: String,
    /// Total number of attempts per request, including the first one.
    pub max_attempts: u32,
    /// Backoff unit in milliseconds. The pause after failed attempt `n`
    /// (1-based) is `backoff_base_ms * 2^n`.
    pub backoff_base_ms: u64,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout_seconds: Option<u64>,
    /// User-Agent sent with check-in requests.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            max_attempts: 3,
            backoff_base_ms: 1000,
            timeout_seconds: None,
            user_agent: MINI_PROGRAM_USER_AGENT.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_attempts` must be greater than 0
    /// - `timeout_seconds`, when set, must be greater than 0
    /// - `base_url` must be an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.max_attempts == 0 {
            return Err(ApiError::Config(
                "max_attempts must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == Some(0) {
            return Err(ApiError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base_url: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "base_url must use http or https, got {}",
                parsed.scheme()
            )));
        }
        Ok(())
    }

    /// Delay to wait after the given failed attempt (1-based).
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let multiplier = 1u64.checked_shl(attempt.min(63)).unwrap_or(u64::MAX);
        Duration::from_millis(self.backoff_base_ms.saturating_mul(multiplier))
    }

    /// Join an API path onto the configured base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.backoff_base_ms, 1000);
        assert!(config.timeout_seconds.is_none());
        assert!(config.user_agent.contains("MiniProgramEnv/Windows"));
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(ApiConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_attempts_rejected() {
        let config = ApiConfig {
            max_attempts: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_attempts"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = ApiConfig {
            timeout_seconds: Some(0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn relative_base_url_rejected() {
        let config = ApiConfig {
            base_url: "sss-web.tastientech.com".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn non_http_scheme_rejected() {
        let config = ApiConfig {
            base_url: "ftp://example.com".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn backoff_doubles_per_attempt() {
        let config = ApiConfig::default();
        assert_eq!(config.backoff_delay(1), Duration::from_secs(2));
        assert_eq!(config.backoff_delay(2), Duration::from_secs(4));
    }

    #[test]
    fn zero_backoff_base_means_no_wait() {
        let config = ApiConfig {
            backoff_base_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.backoff_delay(2), Duration::ZERO);
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:8080/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint("/api/sign/member/signV2"),
            "http://127.0.0.1:8080/api/sign/member/signV2"
        );
    }

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let config: ApiConfig =
            serde_json::from_str(r#"{"max_attempts": 5}"#).expect("deserialize");
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
