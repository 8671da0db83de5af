use crate::notify::traits::NotificationSink;
use async_trait::async_trait;
use serde_json::json;

/// Posts the summary as `{"title": ..., "content": ...}` to an HTTP endpoint.
pub struct WebhookSink {
    url: String,
    client: reqwest::Client,
}

impl WebhookSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    fn id(&self) -> &'static str {
        "webhook"
    }

    async fn send(&self, title: &str, body: &str) -> anyhow::Result<()> {
        let payload = json!({
            "title": title,
            "content": body,
        });
        let response = self.client.post(&self.url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let snippet: String = text.chars().take(200).collect();
            anyhow::bail!("webhook returned {status}: {snippet}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn posts_title_and_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(body_json(json!({"title": "塔斯汀签到脚本通知", "content": "【签到成功】"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let sink = WebhookSink::new(format!("{}/hook", server.uri()));
        assert!(sink.is_available());
        sink.send("塔斯汀签到脚本通知", "【签到成功】")
            .await
            .expect("delivered");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let sink = WebhookSink::new(server.uri());
        let err = sink.send("t", "b").await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
