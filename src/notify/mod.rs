//! Per-run notification accumulation and delivery.
//!
//! Every account outcome appends one entry to a [`NotificationAggregator`].
//! At the end of the run the entries are joined and handed to a
//! [`NotificationSink`] in a single send.

pub mod traits;
pub mod webhook;

pub use traits::{NoopSink, NotificationSink};
pub use webhook::WebhookSink;

use crate::config::NotifyConfig;

/// Separator between entries in the batched message.
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// Ordered, append-only list of formatted notification entries.
///
/// Create one per run; it starts empty.
#[derive(Debug, Default)]
pub struct NotificationAggregator {
    entries: Vec<String>,
}

impl NotificationAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `【title】\nbody`.
    pub fn record(&mut self, title: &str, body: &str) {
        self.entries.push(format!("【{title}】\n{body}"));
        tracing::info!(title, "notification recorded");
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The batched message, or `None` when nothing was recorded.
    pub fn render(&self) -> Option<String> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.join(ENTRY_SEPARATOR))
        }
    }

    /// Send the batched message through `sink` under `title`.
    ///
    /// Does nothing when the list is empty. Delivery problems are logged,
    /// never returned.
    pub async fn flush(&self, sink: &dyn NotificationSink, title: &str) {
        let Some(content) = self.render() else {
            tracing::info!("no notifications recorded, skipping send");
            return;
        };

        if !sink.is_available() {
            tracing::error!(sink = sink.id(), "notification sink unavailable, cannot send");
            return;
        }

        match sink.send(title, &content).await {
            Ok(()) => tracing::info!(sink = sink.id(), entries = self.len(), "notification sent"),
            Err(err) => tracing::error!(sink = sink.id(), error = %err, "notification send failed"),
        }
    }
}

/// Pick the sink described by `config`.
pub fn sink_from_config(config: &NotifyConfig) -> Box<dyn NotificationSink> {
    match config.webhook_url.as_deref() {
        Some(url) => Box::new(WebhookSink::new(url)),
        None => Box::new(NoopSink),
    }
}
