use chrono::{DateTime, Locale, TimeZone};
use chrono_tz::Tz;
use guardview_domain::{DisplayConfig, DomainError};

/// Locale and timezone every formatting call renders with.
#[derive(Debug, Clone)]
pub struct DisplayContext {
    pub locale: Locale,
    pub timezone: Tz,
    pub placeholder: String,
    pub default_filter_name: String,
}

impl DisplayContext {
    pub fn new(locale: Locale, timezone: Tz) -> Self {
        let defaults = DisplayConfig::default();
        Self {
            locale,
            timezone,
            placeholder: defaults.placeholder,
            default_filter_name: defaults.default_filter_name,
        }
    }

    pub fn from_config(config: &DisplayConfig) -> Result<Self, DomainError> {
        Ok(Self {
            locale: config.parse_locale()?,
            timezone: config.parse_timezone()?,
            placeholder: config.placeholder.clone(),
            default_filter_name: config.default_filter_name.clone(),
        })
    }

    pub(crate) fn localize<T: TimeZone>(&self, instant: &DateTime<T>) -> DateTime<Tz> {
        instant.with_timezone(&self.timezone)
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self::new(Locale::en_US, Tz::UTC)
    }
}
