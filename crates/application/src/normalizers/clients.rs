use guardview_domain::{AutoClient, Client, ClientInfo, Named};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::debug;

/// Configured client owning `ip` among its addresses
pub fn get_client_info(clients: &[Client], ip: &str) -> Option<ClientInfo> {
    clients
        .iter()
        .find(|client| client.has_ip(ip))
        .map(|client| ClientInfo::from_parts(&client.name, &client.whois_info))
}

/// Auto-discovered client registered under exactly `ip`
pub fn get_auto_client_info(clients: &[AutoClient], ip: &str) -> Option<ClientInfo> {
    clients
        .iter()
        .find(|client| client.ip == ip)
        .map(|client| ClientInfo::from_parts(&client.name, &client.whois_info))
}

/// Case-insensitive sort by name; ties keep their original order.
pub fn sort_clients<T: Named>(clients: &mut [T]) {
    clients.sort_by_cached_key(|client| client.name().to_uppercase());
}

/// Attaches an `info` field to each row from `{ip: info}` lookup objects,
/// using the row's `param` field as the address. Unknown addresses get `""`.
pub fn add_client_info(
    data: &[Map<String, Value>],
    clients: &[Map<String, Value>],
    param: &str,
) -> Vec<Map<String, Value>> {
    data.iter()
        .map(|row| {
            let info = row
                .get(param)
                .and_then(scalar_to_string)
                .and_then(|ip| {
                    clients
                        .iter()
                        .find_map(|lookup| lookup.get(&ip).filter(|info| is_truthy(info)))
                })
                .cloned()
                .unwrap_or_else(|| Value::String(String::new()));

            let mut row = row.clone();
            row.insert("info".to_string(), info);
            row
        })
        .collect()
}

/// Distinct values of `param` in first-seen order, keyed `ip0`, `ip1`, ...
///
/// Rows without a usable `param` value are skipped.
pub fn get_params_for_clients_search(
    data: &[Map<String, Value>],
    param: &str,
) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    let mut skipped = 0usize;

    let unique: Vec<String> = data
        .iter()
        .filter_map(|row| {
            let value = row.get(param).and_then(scalar_to_string);
            if value.is_none() {
                skipped += 1;
            }
            value
        })
        .filter(|value| seen.insert(value.clone()))
        .collect();

    if skipped > 0 {
        debug!(skipped, param, "Rows without search parameter ignored");
    }

    unique
        .into_iter()
        .enumerate()
        .map(|(idx, value)| (format!("ip{}", idx), value))
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
