//! Shared HTTP client and the retrying request executor.
//!
//! Every vendor call goes through [`RetryingExecutor::execute`], which makes
//! up to `max_attempts` tries with exponential backoff and swallows transport
//! and status failures into an absent result.

use crate::config::ApiConfig;
use crate::error::ApiError;
use reqwest::header::HeaderMap;
use reqwest::{Method, Response, StatusCode};
use std::time::Duration;

/// Build a [`reqwest::Client`] for the vendor API.
///
/// No timeout is applied unless `config.timeout_seconds` is set.
///
/// # Errors
///
/// Returns [`ApiError::Config`] if the client cannot be constructed.
pub fn build_client(config: &ApiConfig) -> Result<reqwest::Client, ApiError> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))
}

/// Issues requests with bounded retries and exponential backoff.
///
/// Any status other than 200 counts as a failed attempt, including 4xx
/// responses that will never succeed on retry.
#[derive(Debug, Clone)]
pub struct RetryingExecutor {
    client: reqwest::Client,
    config: ApiConfig,
}

impl RetryingExecutor {
    /// Create an executor from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let client = build_client(&config)?;
        Ok(Self { client, config })
    }

    /// The configuration this executor was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send `body` as JSON to `url`, retrying until a 200 arrives.
    ///
    /// Returns the first 200 response, or `None` once every attempt has
    /// failed. Never returns an error to the caller.
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        body: &serde_json::Value,
        headers: &HeaderMap,
    ) -> Option<Response> {
        let max_attempts = self.config.max_attempts;
        for attempt in 1..=max_attempts {
            let sent = self
                .client
                .request(method.clone(), url)
                .headers(headers.clone())
                .json(body)
                .send()
                .await;

            match sent {
                Ok(response) if response.status() == StatusCode::OK => return Some(response),
                Ok(response) => {
                    tracing::error!(url, status = %response.status(), attempt, "request failed");
                }
                Err(err) => {
                    tracing::error!(url, error = %err, attempt, "request error");
                }
            }

            if attempt < max_attempts {
                let delay = self.config.backoff_delay(attempt);
                tracing::debug!(url, attempt, ?delay, "backing off before retry");
                tokio::time::sleep(delay).await;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_client_with_default_config() {
        let client = build_client(&ApiConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn build_client_with_timeout() {
        let config = ApiConfig {
            timeout_seconds: Some(5),
            ..Default::default()
        };
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn executor_rejects_invalid_config() {
        let config = ApiConfig {
            max_attempts: 0,
            ..Default::default()
        };
        let err = RetryingExecutor::new(config).unwrap_err();
        assert!(err.to_string().contains("max_attempts"));
    }

    #[test]
    fn executor_exposes_config() {
        let executor = RetryingExecutor::new(ApiConfig::default()).expect("executor");
        assert_eq!(executor.config().max_attempts, 3);
    }

    #[tokio::test]
    async fn unreachable_host_yields_none() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1".into(),
            max_attempts: 2,
            backoff_base_ms: 0,
            ..Default::default()
        };
        let executor = RetryingExecutor::new(config).expect("executor");
        let url = executor.config().endpoint("/nothing");
        let response = executor
            .execute(Method::POST, &url, &serde_json::json!({}), &HeaderMap::new())
            .await;
        assert!(response.is_none());
    }
}
