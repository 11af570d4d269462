use guardview_domain::{DnsAnswer, LogEntry, RawLogEntry};
use tracing::debug;

pub fn normalize_logs(logs: &[RawLogEntry]) -> Vec<LogEntry> {
    debug!(count = logs.len(), "Normalizing query log entries");
    logs.iter().map(normalize_log).collect()
}

/// Flattens the question, renders answers as `"{type}: {value} (ttl={ttl})"`.
pub fn normalize_log(log: &RawLogEntry) -> LogEntry {
    let response = log
        .answer
        .as_deref()
        .map(|answers| answers.iter().map(DnsAnswer::display).collect())
        .unwrap_or_default();

    LogEntry {
        time: log.time.clone(),
        domain: log.question.host.clone(),
        qtype: log.question.qtype.clone(),
        response,
        reason: log.reason.clone(),
        client: log.client.clone(),
        filter_id: log.filter_id,
        rule: log.rule.clone(),
        status: log.status.clone(),
        service_name: log.service_name.clone(),
        original_answer: log.original_answer.clone(),
    }
}
