//! HTTP reachability probe for the redirect check.
//!
//! Any HTTP response counts as "the server is up"; only transport failures
//! (refused connection, TLS handshake not ready yet, timeout) keep the
//! console waiting.

use async_trait::async_trait;
use guardview_application::ports::{ProbeOutcome, UrlProbe};
use guardview_domain::{DomainError, RedirectConfig};
use std::time::Duration;
use tracing::debug;

pub struct ReqwestUrlProbe {
    client: reqwest::Client,
}

impl ReqwestUrlProbe {
    pub fn new(timeout: Duration, accept_invalid_certs: bool) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| DomainError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn from_config(config: &RedirectConfig) -> Result<Self, DomainError> {
        Self::new(config.request_timeout(), config.accept_invalid_certs)
    }
}

#[async_trait]
impl UrlProbe for ReqwestUrlProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                debug!(url = %url, status = status.as_u16(), "Probe answered");
                if status.is_success() {
                    ProbeOutcome::Reachable
                } else {
                    ProbeOutcome::Responded(status.as_u16())
                }
            }
            Err(e) => {
                debug!(url = %url, error = %e, "Probe failed");
                ProbeOutcome::Unreachable(e.to_string())
            }
        }
    }
}
