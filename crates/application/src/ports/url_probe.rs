use async_trait::async_trait;

/// Result of a single reachability check of the console URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered with a success status
    Reachable,
    /// The server answered, but with an error status; it is up nonetheless
    Responded(u16),
    /// Nothing answered (connection refused, TLS not ready, timeout)
    Unreachable(String),
}

impl ProbeOutcome {
    pub fn server_answered(&self) -> bool {
        !matches!(self, ProbeOutcome::Unreachable(_))
    }
}

#[async_trait]
pub trait UrlProbe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}
