use chrono::{DateTime, Duration, Utc};
use guardview_domain::{DomainError, HistoryPoint};

use crate::formatting::{day_label, hour_label, round_to, DisplayContext};

/// Granularity of a statistics series for a given window length in days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryResolution {
    Hourly,
    Daily,
}

impl HistoryResolution {
    pub fn for_interval(interval_days: u32) -> Self {
        match interval_days {
            1 | 7 => HistoryResolution::Hourly,
            _ => HistoryResolution::Daily,
        }
    }

    fn step(self) -> Duration {
        match self {
            HistoryResolution::Hourly => Duration::hours(1),
            HistoryResolution::Daily => Duration::days(1),
        }
    }
}

/// Labels a statistics series for charting.
///
/// One-day and seven-day windows carry one value per hour starting
/// `24 * interval` hours before `now`; longer windows carry one value per day
/// starting `interval - 1` days before `now`. A window reaching outside the
/// representable date range is rejected.
pub fn normalize_history(
    history: &[f64],
    interval_days: u32,
    now: DateTime<Utc>,
    ctx: &DisplayContext,
) -> Result<Vec<HistoryPoint>, DomainError> {
    let out_of_range = || DomainError::HistoryOutOfRange(interval_days);
    let interval = i64::from(interval_days);
    let resolution = HistoryResolution::for_interval(interval_days);

    let lookback = match resolution {
        HistoryResolution::Hourly => Duration::try_hours(24 * interval),
        HistoryResolution::Daily => Duration::try_days((interval - 1).max(0)),
    }
    .ok_or_else(out_of_range)?;
    let start = now.checked_sub_signed(lookback).ok_or_else(out_of_range)?;

    history
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let offset = i32::try_from(index)
                .ok()
                .and_then(|index| resolution.step().checked_mul(index))
                .ok_or_else(out_of_range)?;
            let instant = start.checked_add_signed(offset).ok_or_else(out_of_range)?;
            let x = match resolution {
                HistoryResolution::Hourly => hour_label(ctx, instant),
                HistoryResolution::Daily => day_label(ctx, instant),
            };
            Ok(HistoryPoint {
                x,
                y: round_to(*value, 2),
            })
        })
        .collect()
}
