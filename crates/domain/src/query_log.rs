use serde::{Deserialize, Serialize};

/// Question section of a logged DNS query
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsQuestion {
    pub host: String,
    #[serde(rename = "type")]
    pub qtype: String,
    #[serde(default)]
    pub class: Option<String>,
}

/// Single answer record of a logged DNS response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsAnswer {
    #[serde(rename = "type")]
    pub rtype: String,
    pub value: String,
    #[serde(default)]
    pub ttl: u32,
}

impl DnsAnswer {
    /// `"{type}: {value} (ttl={ttl})"`, the query log's response column.
    pub fn display(&self) -> String {
        format!("{}: {} (ttl={})", self.rtype, self.value, self.ttl)
    }
}

/// Query log entry as returned by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawLogEntry {
    pub time: String,
    pub question: DnsQuestion,
    #[serde(default)]
    pub answer: Option<Vec<DnsAnswer>>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub client: String,
    #[serde(rename = "filterId", default)]
    pub filter_id: Option<i64>,
    #[serde(default)]
    pub rule: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub original_answer: Option<Vec<DnsAnswer>>,
}

/// Query log row as rendered by the console
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub time: String,
    pub domain: String,
    #[serde(rename = "type")]
    pub qtype: String,
    pub response: Vec<String>,
    pub reason: String,
    pub client: String,
    pub filter_id: Option<i64>,
    pub rule: Option<String>,
    pub status: String,
    pub service_name: Option<String>,
    pub original_answer: Option<Vec<DnsAnswer>>,
}
