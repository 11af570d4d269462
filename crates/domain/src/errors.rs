use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Top stat entry must hold exactly one key, found {0}")]
    AmbiguousTopStat(usize),

    #[error("Top stat count for {0} is not a non-negative integer")]
    InvalidTopStatCount(String),

    #[error("History window of {0} days is out of range")]
    HistoryOutOfRange(u32),

    #[error("Failed to load message catalog {0}: {1}")]
    CatalogLoad(String, String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::InvalidPayload(err.to_string())
    }
}
