use guardview_application::normalizers::normalize_top_stats;
use guardview_domain::{DomainError, TopStatItem};
use serde_json::{json, Map, Value};

fn entries(value: Value) -> Vec<Map<String, Value>> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_single_key_entries_become_pairs() {
    let stats = entries(json!([{"example.org": 120}, {"ads.example": 42}]));

    let items = normalize_top_stats(&stats).unwrap();

    assert_eq!(
        items,
        vec![
            TopStatItem::new("example.org", 120),
            TopStatItem::new("ads.example", 42),
        ]
    );
}

#[test]
fn test_ambiguous_entry_fails_whole_batch() {
    let stats = entries(json!([{"example.org": 1}, {"a.example": 1, "b.example": 2}]));

    assert_eq!(
        normalize_top_stats(&stats),
        Err(DomainError::AmbiguousTopStat(2))
    );
}

#[test]
fn test_non_numeric_count_rejected() {
    let stats = entries(json!([{"example.org": "many"}]));

    assert_eq!(
        normalize_top_stats(&stats),
        Err(DomainError::InvalidTopStatCount("example.org".to_string()))
    );
}

#[test]
fn test_empty_list() {
    assert_eq!(normalize_top_stats(&[]), Ok(vec![]));
}
