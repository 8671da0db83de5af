//! HTTP implementation of [`CheckinApi`] against the vendor endpoints.

use crate::activity::find_activity_id;
use crate::api::CheckinApi;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::RetryingExecutor;
use crate::types::{ActivityId, BannerListRequest, SignRequest};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;

/// Banner/campaign listing endpoint.
pub const BANNER_LIST_PATH: &str = "/api/minic/shop/intelligence/banner/c/list";

/// Daily check-in endpoint.
pub const SIGN_PATH: &str = "/api/sign/member/signV2";

/// Vendor API client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct TastienClient {
    executor: RetryingExecutor,
}

impl TastienClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the configuration is invalid.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            executor: RetryingExecutor::new(config)?,
        })
    }

    fn config(&self) -> &ApiConfig {
        self.executor.config()
    }

    fn sign_headers(&self, token: &str) -> Result<HeaderMap, ApiError> {
        let mut headers = auth_headers(token)?;
        let ua = HeaderValue::from_str(&self.config().user_agent)
            .map_err(|e| ApiError::Config(format!("invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, ua);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("xweb_xhr"),
            HeaderValue::from_static("1"),
        );
        Ok(headers)
    }
}

/// `user-token` and `channel` headers shared by every call.
fn auth_headers(token: &str) -> Result<HeaderMap, ApiError> {
    let token = HeaderValue::from_str(token)
        .map_err(|_| ApiError::Config("account token is not a valid header value".into()))?;
    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static("user-token"), token);
    headers.insert(HeaderName::from_static("channel"), HeaderValue::from_static("1"));
    Ok(headers)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Parse(format!("request body: {e}")))
}

impl CheckinApi for TastienClient {
    async fn resolve_activity_id(&self, token: &str) -> Option<ActivityId> {
        let url = self.config().endpoint(BANNER_LIST_PATH);
        let (headers, body) = match (auth_headers(token), to_json(&BannerListRequest::default())) {
            (Ok(headers), Ok(body)) => (headers, body),
            (Err(err), _) | (_, Err(err)) => {
                tracing::error!(error = %err, "cannot build banner list request");
                return None;
            }
        };

        let response = self
            .executor
            .execute(Method::POST, &url, &body, &headers)
            .await?;
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(url = %url, error = %err, "failed to read banner list body");
                return None;
            }
        };

        match find_activity_id(&text) {
            Ok(Some(id)) => {
                tracing::info!(activity_id = %id, "discovered check-in activity id");
                Some(id)
            }
            Ok(None) => {
                tracing::debug!("no check-in banner with a usable activity id");
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to parse check-in activity id");
                None
            }
        }
    }

    async fn sign(&self, token: &str, activity_id: &ActivityId) -> Result<String, ApiError> {
        let url = self.config().endpoint(SIGN_PATH);
        let headers = self.sign_headers(token)?;
        let body = to_json(&SignRequest::new(activity_id))?;

        let response = self
            .executor
            .execute(Method::POST, &url, &body, &headers)
            .await
            .ok_or_else(|| {
                ApiError::HttpStatus(format!(
                    "no 200 response from {url} after {} attempts",
                    self.config().max_attempts
                ))
            })?;

        response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to read check-in body: {e}")))
    }
}
