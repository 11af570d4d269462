use async_trait::async_trait;
use std::time::Duration;

/// Delay between redirect probes, swappable in tests
#[async_trait]
pub trait RetryTimer: Send + Sync {
    async fn wait(&self, delay: Duration);
}
