use serde::{Deserialize, Serialize};

/// Filter list subscription as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawFilter {
    #[serde(default)]
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rules_count: Option<u64>,
}

/// Filtering status payload; `user_rules` is kept loose because older
/// backends send a string or null instead of a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawFilteringStatus {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub filters: Option<Vec<RawFilter>>,
    #[serde(default)]
    pub user_rules: Option<serde_json::Value>,
    #[serde(default)]
    pub interval: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterView {
    pub id: i64,
    pub url: String,
    pub enabled: bool,
    pub last_updated: String,
    pub name: String,
    pub rules_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteringStatus {
    pub enabled: bool,
    pub user_rules: String,
    pub filters: Vec<FilterView>,
    pub interval: Option<u32>,
}
