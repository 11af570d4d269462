use std::collections::HashMap;

use crate::errors::DomainError;
use crate::validation::ErrorKind;

/// Translation table mapping message keys to display text.
///
/// Unknown keys resolve to the key itself, so a missing translation shows
/// up as `form_error_required` instead of an empty label.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in English texts for every validation error
    pub fn english() -> Self {
        let mut catalog = Self::new();
        for kind in ErrorKind::ALL {
            catalog.insert(kind.translation_key(), default_text(kind));
        }
        catalog
    }

    /// Parses a flat `{"key": "text"}` JSON document.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let messages: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { messages })
    }

    pub fn from_file(path: &str) -> Result<Self, DomainError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DomainError::CatalogLoad(path.to_string(), e.to_string()))?;
        Self::from_json(&contents)
            .map_err(|e| DomainError::CatalogLoad(path.to_string(), e.to_string()))
    }

    pub fn insert(&mut self, key: &str, text: &str) {
        self.messages.insert(key.to_string(), text.to_string());
    }

    /// Layers `other` on top of `self`; keys present in both take `other`'s text.
    pub fn merge(mut self, other: MessageCatalog) -> Self {
        self.messages.extend(other.messages);
        self
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn resolve(&self, kind: ErrorKind) -> &str {
        self.translate(kind.translation_key())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn default_text(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Required => "Required field",
        ErrorKind::InvalidIpv4 => "Invalid IPv4 format",
        ErrorKind::InvalidIpv6 => "Invalid IPv6 format",
        ErrorKind::InvalidIp => "Invalid IP format",
        ErrorKind::InvalidMac => "Invalid MAC format",
        ErrorKind::NotPositive => "Must be greater than 0",
        ErrorKind::Negative => "Must be equal to 0 or greater",
        ErrorKind::PortRange => "Enter port value in the range of 80-65535",
        ErrorKind::UnsafePort => "The port is unsafe",
        ErrorKind::InvalidDomain => "Invalid domain format",
        ErrorKind::InvalidAnswer => "Invalid answer format",
        ErrorKind::InvalidUrl => "Invalid URL format",
    }
}
