use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::DomainError;

/// One point of a statistics chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub x: String,
    pub y: f64,
}

/// Entry of a "top N" table.
///
/// The backend encodes each entry as a single-key object (`{"example.org": 12}`);
/// anything else is rejected at the boundary instead of picking an arbitrary key.
/// Counts are hit tallies, so only non-negative integers are accepted; a
/// fractional or negative value fails with `InvalidTopStatCount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct TopStatItem {
    pub name: String,
    pub count: u64,
}

impl TopStatItem {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

impl TryFrom<Map<String, Value>> for TopStatItem {
    type Error = DomainError;

    fn try_from(entry: Map<String, Value>) -> Result<Self, Self::Error> {
        if entry.len() != 1 {
            return Err(DomainError::AmbiguousTopStat(entry.len()));
        }

        let (name, value) = entry
            .into_iter()
            .next()
            .ok_or(DomainError::AmbiguousTopStat(0))?;
        let count = value
            .as_u64()
            .ok_or_else(|| DomainError::InvalidTopStatCount(name.clone()))?;

        Ok(Self { name, count })
    }
}

impl TryFrom<&Map<String, Value>> for TopStatItem {
    type Error = DomainError;

    fn try_from(entry: &Map<String, Value>) -> Result<Self, Self::Error> {
        Self::try_from(entry.clone())
    }
}
