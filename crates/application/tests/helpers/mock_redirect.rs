use async_trait::async_trait;
use guardview_application::ports::{ProbeOutcome, RetryTimer, UrlProbe};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Replays scripted outcomes; once the script runs out every probe is unreachable.
#[derive(Clone, Default)]
pub struct MockUrlProbe {
    script: Arc<Mutex<VecDeque<ProbeOutcome>>>,
    probed: Arc<Mutex<Vec<String>>>,
}

impl MockUrlProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(outcomes: Vec<ProbeOutcome>) -> Self {
        Self {
            script: Arc::new(Mutex::new(outcomes.into())),
            probed: Arc::default(),
        }
    }

    /// Unreachable `failures` times, then `outcome`
    pub fn answering_after(failures: usize, outcome: ProbeOutcome) -> Self {
        let mut script: Vec<ProbeOutcome> = (0..failures)
            .map(|_| ProbeOutcome::Unreachable("connection refused".to_string()))
            .collect();
        script.push(outcome);
        Self::with_script(script)
    }

    pub fn calls(&self) -> usize {
        self.probed.lock().unwrap().len()
    }

    pub fn probed_urls(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlProbe for MockUrlProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        self.probed.lock().unwrap().push(url.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ProbeOutcome::Unreachable("connection refused".to_string()))
    }
}

/// Records requested delays without sleeping
#[derive(Clone, Default)]
pub struct MockRetryTimer {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl MockRetryTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl RetryTimer for MockRetryTimer {
    async fn wait(&self, delay: Duration) {
        self.waits.lock().unwrap().push(delay);
    }
}
