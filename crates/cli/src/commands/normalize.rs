use chrono::Utc;
use guardview_application::normalizers::{
    normalize_filtering_status, normalize_history, normalize_logs, normalize_top_stats,
    normalize_whois,
};
use guardview_domain::{Config, RawFilteringStatus, RawLogEntry, WhoisInfo};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use super::print_json;
use crate::bootstrap::display_context;

/// The query log endpoint wraps entries in `data`; exports are bare lists.
#[derive(Deserialize)]
#[serde(untagged)]
enum LogPage {
    Wrapped { data: Vec<RawLogEntry> },
    Bare(Vec<RawLogEntry>),
}

pub fn logs(json: &str) -> anyhow::Result<()> {
    let entries = match serde_json::from_str::<LogPage>(json)? {
        LogPage::Wrapped { data } => data,
        LogPage::Bare(entries) => entries,
    };
    let normalized = normalize_logs(&entries);
    info!(entries = normalized.len(), "Query log normalized");
    print_json(&normalized)
}

pub fn filtering(json: &str, config: &Config) -> anyhow::Result<()> {
    let ctx = display_context(config)?;
    let status: RawFilteringStatus = serde_json::from_str(json)?;
    print_json(&normalize_filtering_status(&status, &ctx))
}

pub fn history(json: &str, interval: u32, config: &Config) -> anyhow::Result<()> {
    let ctx = display_context(config)?;
    let series: Vec<f64> = serde_json::from_str(json)?;
    print_json(&normalize_history(&series, interval, Utc::now(), &ctx)?)
}

pub fn top_stats(json: &str) -> anyhow::Result<()> {
    let entries: Vec<Map<String, Value>> = serde_json::from_str(json)?;
    print_json(&normalize_top_stats(&entries)?)
}

pub fn whois(json: &str) -> anyhow::Result<()> {
    let whois: WhoisInfo = serde_json::from_str(json)?;
    print_json(&normalize_whois(&whois))
}
