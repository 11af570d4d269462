use guardview_domain::{DomainError, TopStatItem};
use serde_json::{Map, Value};

/// Converts `[{"example.org": 12}, ...]` into `{name, count}` pairs.
pub fn normalize_top_stats(stats: &[Map<String, Value>]) -> Result<Vec<TopStatItem>, DomainError> {
    stats.iter().map(TopStatItem::try_from).collect()
}
