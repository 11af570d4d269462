use async_trait::async_trait;
use guardview_application::ports::RetryTimer;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRetryTimer;

#[async_trait]
impl RetryTimer for TokioRetryTimer {
    async fn wait(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}
