use chrono::Locale;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// POSIX locale name used for month names and date layout ("en_US", "de-DE")
    #[serde(default = "default_locale")]
    pub locale: String,

    /// IANA timezone the console renders timestamps in
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Shown in place of a missing timestamp
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default = "default_filter_name")]
    pub default_filter_name: String,

    /// Optional JSON file with `translation key -> text` pairs
    #[serde(default)]
    pub translations: Option<String>,
}

impl DisplayConfig {
    pub fn parse_locale(&self) -> Result<Locale, DomainError> {
        parse_locale(&self.locale)
    }

    pub fn parse_timezone(&self) -> Result<Tz, DomainError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| DomainError::UnknownTimezone(self.timezone.clone()))
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            timezone: default_timezone(),
            placeholder: default_placeholder(),
            default_filter_name: default_filter_name(),
            translations: None,
        }
    }
}

/// Accepts both POSIX ("pt_BR") and BCP 47 ("pt-BR") spellings.
pub fn parse_locale(name: &str) -> Result<Locale, DomainError> {
    let normalized = name.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| DomainError::UnknownLocale(name.to_string()))
}

fn default_locale() -> String {
    "en_US".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_placeholder() -> String {
    "–".to_string()
}

fn default_filter_name() -> String {
    "Default name".to_string()
}
