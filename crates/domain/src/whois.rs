use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// WHOIS / geolocation attributes attached to a client address.
///
/// Accepts both an object and the `[[key, value], ...]` pair list the
/// backend stores internally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WhoisWire")]
pub struct WhoisInfo(pub BTreeMap<String, String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum WhoisWire {
    Map(BTreeMap<String, String>),
    Pairs(Vec<(String, String)>),
    Empty,
}

impl From<WhoisWire> for WhoisInfo {
    fn from(wire: WhoisWire) -> Self {
        match wire {
            WhoisWire::Map(map) => WhoisInfo(map),
            WhoisWire::Pairs(pairs) => WhoisInfo(pairs.into_iter().collect()),
            WhoisWire::Empty => WhoisInfo::default(),
        }
    }
}

impl WhoisInfo {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for WhoisInfo {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        WhoisInfo(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// WHOIS record with `city`/`country` folded into a single `location`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedWhois {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}
