use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use guardview_domain::DomainError;

use super::DisplayContext;

const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_TIME_FORMAT: &str = "%x %H:%M";
const HOUR_LABEL_FORMAT: &str = "%-d %b %H:00";
const DAY_LABEL_FORMAT: &str = "%-d %b %Y";
const SQL_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses an RFC 3339 timestamp; zone-less `YYYY-MM-DD HH:MM:SS` is read as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, DomainError> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed);
    }

    NaiveDateTime::parse_from_str(value, SQL_DATE_TIME_FORMAT)
        .map(|naive| naive.and_utc().fixed_offset())
        .map_err(|_| DomainError::InvalidTimestamp(value.to_string()))
}

/// `HH:MM:SS` in the context timezone
pub fn format_time(ctx: &DisplayContext, value: &str) -> Result<String, DomainError> {
    let parsed = parse_timestamp(value)?;
    Ok(ctx.localize(&parsed).format(TIME_FORMAT).to_string())
}

/// Locale date followed by a 24-hour `HH:MM`
pub fn format_date_time(ctx: &DisplayContext, value: &str) -> Result<String, DomainError> {
    let parsed = parse_timestamp(value)?;
    Ok(ctx
        .localize(&parsed)
        .format_localized(DATE_TIME_FORMAT, ctx.locale)
        .to_string())
}

/// Hourly chart label, e.g. `7 Oct 14:00`
pub fn hour_label(ctx: &DisplayContext, instant: DateTime<Utc>) -> String {
    ctx.localize(&instant)
        .format_localized(HOUR_LABEL_FORMAT, ctx.locale)
        .to_string()
}

/// Daily chart label, e.g. `7 Oct 2026`
pub fn day_label(ctx: &DisplayContext, instant: DateTime<Utc>) -> String {
    ctx.localize(&instant)
        .format_localized(DAY_LABEL_FORMAT, ctx.locale)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Locale, TimeZone};
    use chrono_tz::Tz;

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let parsed = parse_timestamp("2026-10-17T14:05:09.123456+03:00").unwrap();
        assert_eq!(parsed.with_timezone(&Utc).to_rfc3339(), "2026-10-17T11:05:09.123456+00:00");
    }

    #[test]
    fn test_parse_timestamp_sql_format_is_utc() {
        let parsed = parse_timestamp("2026-10-17 14:05:09").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert_eq!(
            parse_timestamp("yesterday"),
            Err(DomainError::InvalidTimestamp("yesterday".to_string()))
        );
    }

    #[test]
    fn test_format_time_uses_context_timezone() {
        let ctx = DisplayContext::new(Locale::en_US, Tz::Europe__Berlin);
        // CEST is UTC+2 in October before the switch
        assert_eq!(format_time(&ctx, "2026-10-17T12:00:00Z").unwrap(), "14:00:00");
    }

    #[test]
    fn test_format_date_time_contains_24h_time() {
        let ctx = DisplayContext::default();
        let formatted = format_date_time(&ctx, "2026-10-17T21:30:00Z").unwrap();
        assert!(formatted.ends_with("21:30"), "got {}", formatted);
        assert!(formatted.contains("10"), "got {}", formatted);
    }

    #[test]
    fn test_hour_and_day_labels() {
        let ctx = DisplayContext::default();
        let instant = Utc.with_ymd_and_hms(2026, 10, 7, 14, 35, 0).unwrap();

        assert_eq!(hour_label(&ctx, instant), "7 Oct 14:00");
        assert_eq!(day_label(&ctx, instant), "7 Oct 2026");
    }
}
