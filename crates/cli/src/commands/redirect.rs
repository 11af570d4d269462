use guardview_application::use_cases::{CheckRedirectUseCase, PlanProtocolRedirectUseCase};
use guardview_domain::{
    Config, CurrentLocation, RedirectAction, RedirectOutcome, TlsRedirectSettings,
};
use guardview_infrastructure::{ReqwestUrlProbe, TokioRetryTimer};
use serde::Serialize;
use std::sync::Arc;
use url::Url;

use super::print_json;

fn check_redirect_use_case(config: &Config) -> anyhow::Result<CheckRedirectUseCase> {
    let probe = Arc::new(ReqwestUrlProbe::from_config(&config.redirect)?);
    Ok(CheckRedirectUseCase::new(probe, Arc::new(TokioRetryTimer)).with_config(&config.redirect))
}

pub async fn check(url: &str, config: &Config) -> anyhow::Result<()> {
    let outcome = check_redirect_use_case(config)?.execute(url).await;
    print_json(&outcome)
}

#[derive(Serialize)]
struct TlsRedirectReport {
    plan: RedirectAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<RedirectOutcome>,
}

pub async fn after_tls_change(
    from: &str,
    enabled: bool,
    https_port: Option<u16>,
    config: &Config,
) -> anyhow::Result<()> {
    let location = parse_location(from)?;
    let tls = TlsRedirectSettings {
        enabled,
        port_https: https_port,
    };

    let plan = PlanProtocolRedirectUseCase::new(config.network.http_port).execute(&location, &tls);
    let outcome = match &plan {
        RedirectAction::Probe(url) => Some(check_redirect_use_case(config)?.execute(url).await),
        RedirectAction::Replace(_) | RedirectAction::Stay => None,
    };

    print_json(&TlsRedirectReport { plan, outcome })
}

fn parse_location(raw: &str) -> anyhow::Result<CurrentLocation> {
    let url = Url::parse(raw)?;
    let hostname = url
        .host_str()
        .ok_or_else(|| anyhow::anyhow!("URL has no host: {}", raw))?;

    let location = match url.scheme() {
        "https" => CurrentLocation::https(hostname, url.port()),
        "http" => CurrentLocation::http(hostname, url.port()),
        other => anyhow::bail!("Unsupported scheme: {}", other),
    };

    let hash = url.fragment().map(|f| format!("#{}", f)).unwrap_or_default();
    Ok(location.with_hash(&hash))
}
