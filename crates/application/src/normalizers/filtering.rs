use guardview_domain::{FilterView, FilteringStatus, RawFilter, RawFilteringStatus};
use serde_json::Value;
use tracing::warn;

use crate::formatting::{format_date_time, DisplayContext};

pub fn normalize_filtering_status(
    status: &RawFilteringStatus,
    ctx: &DisplayContext,
) -> FilteringStatus {
    let filters = status
        .filters
        .as_deref()
        .map(|filters| filters.iter().map(|f| normalize_filter(f, ctx)).collect())
        .unwrap_or_default();

    FilteringStatus {
        enabled: status.enabled,
        user_rules: join_user_rules(status.user_rules.as_ref()),
        filters,
        interval: status.interval,
    }
}

fn normalize_filter(filter: &RawFilter, ctx: &DisplayContext) -> FilterView {
    let last_updated = match filter.last_updated.as_deref() {
        Some(timestamp) if !timestamp.is_empty() => format_date_time(ctx, timestamp)
            .unwrap_or_else(|e| {
                warn!(filter_id = filter.id, error = %e, "Unreadable filter update time");
                ctx.placeholder.clone()
            }),
        _ => ctx.placeholder.clone(),
    };

    FilterView {
        id: filter.id,
        url: filter.url.clone(),
        enabled: filter.enabled,
        last_updated,
        name: filter
            .name
            .clone()
            .unwrap_or_else(|| ctx.default_filter_name.clone()),
        rules_count: filter.rules_count.unwrap_or(0),
    }
}

/// One rule per line; anything but a list yields an empty editor.
fn join_user_rules(user_rules: Option<&Value>) -> String {
    match user_rules {
        Some(Value::Array(rules)) => rules
            .iter()
            .map(|rule| match rule {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}
