use guardview_application::normalizers::{compare_versions, is_version_greater};
use std::cmp::Ordering;

#[test]
fn test_newer_release_detected() {
    assert!(is_version_greater("v0.98.1", "v0.99.0"));
    assert!(is_version_greater("0.107.9", "0.107.10"));
    assert!(is_version_greater("1.2", "1.2.1"));
}

#[test]
fn test_same_or_older_release_ignored() {
    assert!(!is_version_greater("v0.99.0", "v0.99.0"));
    assert!(!is_version_greater("v0.99.1", "v0.99.0"));
    assert!(!is_version_greater("1.0", "1"));
}

#[test]
fn test_prefix_ignored() {
    assert_eq!(compare_versions("v1.2.3", "1.2.3"), Ordering::Equal);
}

#[test]
fn test_prerelease_suffix_compares_by_number() {
    assert_eq!(compare_versions("0.107.0-beta", "0.107.0"), Ordering::Equal);
    assert_eq!(compare_versions("0.107.0-b.1", "0.107.0"), Ordering::Greater);
    assert_eq!(compare_versions("0.106.3", "0.107.0-b.1"), Ordering::Less);
}

#[test]
fn test_empty_versions_compare_equal() {
    assert_eq!(compare_versions("", "1.0"), Ordering::Equal);
    assert!(!is_version_greater("1.0", ""));
}
