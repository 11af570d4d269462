mod retry_timer;
mod url_probe;

pub use retry_timer::RetryTimer;
pub use url_probe::{ProbeOutcome, UrlProbe};
