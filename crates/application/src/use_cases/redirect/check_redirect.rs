use crate::ports::{RetryTimer, UrlProbe};
use guardview_domain::{RedirectConfig, RedirectOutcome};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const DEFAULT_MAX_ATTEMPTS: u32 = 10;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Waits for the console to come up on a new URL before navigating to it.
///
/// After the encryption settings change, the web server restarts on a
/// different scheme or port. The URL is probed until any HTTP response
/// arrives; once `max_attempts` probes failed the redirect is issued anyway.
pub struct CheckRedirectUseCase {
    probe: Arc<dyn UrlProbe>,
    timer: Arc<dyn RetryTimer>,
    max_attempts: u32,
    retry_delay: Duration,
}

impl CheckRedirectUseCase {
    pub fn new(probe: Arc<dyn UrlProbe>, timer: Arc<dyn RetryTimer>) -> Self {
        Self {
            probe,
            timer,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_limits(mut self, max_attempts: u32, retry_delay: Duration) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.retry_delay = retry_delay;
        self
    }

    pub fn with_config(self, config: &RedirectConfig) -> Self {
        self.with_limits(config.max_attempts, config.retry_delay())
    }

    pub async fn execute(&self, url: &str) -> RedirectOutcome {
        for attempt in 1..=self.max_attempts {
            let outcome = self.probe.probe(url).await;

            if outcome.server_answered() {
                info!(url = %url, attempt, "Console reachable, redirecting");
                return RedirectOutcome {
                    url: url.to_string(),
                    attempts: attempt,
                    confirmed: true,
                };
            }

            debug!(url = %url, attempt, outcome = ?outcome, "Console not reachable yet");
            if attempt < self.max_attempts {
                self.timer.wait(self.retry_delay).await;
            }
        }

        warn!(
            url = %url,
            attempts = self.max_attempts,
            "Console never answered, redirecting anyway"
        );
        RedirectOutcome {
            url: url.to_string(),
            attempts: self.max_attempts,
            confirmed: false,
        }
    }
}
