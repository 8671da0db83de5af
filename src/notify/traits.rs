use async_trait::async_trait;

/// Destination for the end-of-run summary. New transports only need to
/// implement this trait.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Stable sink identifier (e.g. `webhook`, `noop`).
    fn id(&self) -> &'static str;

    /// Whether the sink can deliver at all. Unavailable sinks are never
    /// asked to send.
    fn is_available(&self) -> bool {
        true
    }

    /// Deliver one message.
    async fn send(&self, title: &str, body: &str) -> anyhow::Result<()>;
}

/// Sink used when no transport is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

#[async_trait]
impl NotificationSink for NoopSink {
    fn id(&self) -> &'static str {
        "noop"
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn send(&self, _title: &str, _body: &str) -> anyhow::Result<()> {
        Ok(())
    }
}
