use std::cmp::Ordering;

/// Compares dotted versions such as `v0.98.1` and `0.99`.
///
/// A leading `v` is ignored and each component compares by its leading
/// digits. A component missing on one side only matters when the other side
/// is non-zero, so `1.0` equals `1`. Empty input compares equal.
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    if left.is_empty() || right.is_empty() {
        return Ordering::Equal;
    }

    let left: Vec<&str> = strip_prefix(left).split('.').collect();
    let right: Vec<&str> = strip_prefix(right).split('.').collect();

    for i in 0..left.len().max(right.len()) {
        let a = left.get(i).copied().filter(|s| !s.is_empty());
        let b = right.get(i).copied().filter(|s| !s.is_empty());
        let a_num = a.and_then(leading_number);
        let b_num = b.and_then(leading_number);

        match (a_num, b_num) {
            (Some(x), Some(y)) if x != y => return x.cmp(&y),
            (Some(x), None) if b.is_none() && x > 0 => return Ordering::Greater,
            (None, Some(y)) if a.is_none() && y > 0 => return Ordering::Less,
            _ => {}
        }
    }

    Ordering::Equal
}

/// `true` when `latest` is strictly newer than `current`.
pub fn is_version_greater(current: &str, latest: &str) -> bool {
    compare_versions(current, latest) == Ordering::Less
}

fn strip_prefix(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

fn leading_number(component: &str) -> Option<u64> {
    let digits: String = component
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
