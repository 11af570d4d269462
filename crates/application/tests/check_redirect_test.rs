use guardview_application::ports::ProbeOutcome;
use guardview_application::use_cases::CheckRedirectUseCase;
use guardview_domain::{RedirectConfig, RedirectOutcome};
use std::sync::Arc;
use std::time::Duration;

mod helpers;
use helpers::{MockRetryTimer, MockUrlProbe};

const URL: &str = "https://192.168.1.1:8443/#encryption";

fn use_case(probe: &MockUrlProbe, timer: &MockRetryTimer) -> CheckRedirectUseCase {
    CheckRedirectUseCase::new(Arc::new(probe.clone()), Arc::new(timer.clone()))
}

#[tokio::test]
async fn test_redirects_on_first_answer() {
    let probe = MockUrlProbe::with_script(vec![ProbeOutcome::Reachable]);
    let timer = MockRetryTimer::new();

    let outcome = use_case(&probe, &timer).execute(URL).await;

    assert_eq!(
        outcome,
        RedirectOutcome {
            url: URL.to_string(),
            attempts: 1,
            confirmed: true,
        }
    );
    assert_eq!(probe.calls(), 1);
    assert!(timer.waits().is_empty());
}

#[tokio::test]
async fn test_error_status_counts_as_answer() {
    let probe = MockUrlProbe::answering_after(2, ProbeOutcome::Responded(502));
    let timer = MockRetryTimer::new();

    let outcome = use_case(&probe, &timer).execute(URL).await;

    assert!(outcome.confirmed);
    assert_eq!(outcome.attempts, 3);
    assert_eq!(timer.waits(), vec![Duration::from_secs(1); 2]);
}

#[tokio::test]
async fn test_gives_up_after_ten_attempts_by_default() {
    let probe = MockUrlProbe::new();
    let timer = MockRetryTimer::new();

    let outcome = use_case(&probe, &timer).execute(URL).await;

    assert!(!outcome.confirmed);
    assert_eq!(outcome.attempts, 10);
    assert_eq!(outcome.url, URL);
    assert_eq!(probe.calls(), 10);
    assert_eq!(timer.waits().len(), 9);
}

#[tokio::test]
async fn test_every_probe_targets_same_url() {
    let probe = MockUrlProbe::answering_after(3, ProbeOutcome::Reachable);
    let timer = MockRetryTimer::new();

    use_case(&probe, &timer).execute(URL).await;

    assert_eq!(probe.probed_urls(), vec![URL.to_string(); 4]);
}

#[tokio::test]
async fn test_custom_limits() {
    let probe = MockUrlProbe::new();
    let timer = MockRetryTimer::new();

    let outcome = use_case(&probe, &timer)
        .with_limits(3, Duration::from_millis(250))
        .execute(URL)
        .await;

    assert_eq!(outcome.attempts, 3);
    assert_eq!(timer.waits(), vec![Duration::from_millis(250); 2]);
}

#[tokio::test]
async fn test_zero_attempts_still_probes_once() {
    let probe = MockUrlProbe::with_script(vec![ProbeOutcome::Reachable]);
    let timer = MockRetryTimer::new();

    let outcome = use_case(&probe, &timer)
        .with_limits(0, Duration::from_millis(10))
        .execute(URL)
        .await;

    assert!(outcome.confirmed);
    assert_eq!(probe.calls(), 1);
}

#[tokio::test]
async fn test_limits_from_config() {
    let probe = MockUrlProbe::new();
    let timer = MockRetryTimer::new();
    let config = RedirectConfig {
        max_attempts: 2,
        retry_delay_ms: 50,
        ..RedirectConfig::default()
    };

    let outcome = use_case(&probe, &timer).with_config(&config).execute(URL).await;

    assert_eq!(outcome.attempts, 2);
    assert_eq!(timer.waits(), vec![Duration::from_millis(50)]);
}
