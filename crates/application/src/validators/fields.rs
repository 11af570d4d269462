//! Per-field validators for the settings forms.
//!
//! Every validator accepts the raw [`FieldValue`] and returns `Ok(())` or the
//! [`ErrorKind`] to display. Format validators ignore empty fields so they can
//! be combined with [`required`].
use guardview_domain::{ErrorKind, FieldValue, ValidationResult};

use super::patterns::{is_host, is_ipv4, is_ipv6, is_mac, is_url_with_protocol, UNSAFE_PORTS};

pub type Validator = fn(&FieldValue) -> ValidationResult;

const MIN_PORT: f64 = 80.0;
const MAX_PORT: f64 = 65535.0;

/// Runs validators in order and reports the first failure.
pub fn validate(value: &FieldValue, validators: &[Validator]) -> ValidationResult {
    validators.iter().try_for_each(|validator| validator(value))
}

pub fn required(value: &FieldValue) -> ValidationResult {
    if value.is_truthy() || value.is_zero() {
        return Ok(());
    }
    Err(ErrorKind::Required)
}

pub fn ipv4(value: &FieldValue) -> ValidationResult {
    check_text(value, ErrorKind::InvalidIpv4, is_ipv4)
}

pub fn ipv6(value: &FieldValue) -> ValidationResult {
    check_text(value, ErrorKind::InvalidIpv6, is_ipv6)
}

pub fn ip(value: &FieldValue) -> ValidationResult {
    check_text(value, ErrorKind::InvalidIp, |text| is_ipv4(text) || is_ipv6(text))
}

pub fn mac(value: &FieldValue) -> ValidationResult {
    check_text(value, ErrorKind::InvalidMac, is_mac)
}

pub fn domain(value: &FieldValue) -> ValidationResult {
    check_text(value, ErrorKind::InvalidDomain, is_host)
}

/// DNS rewrite answer: an address or a host name
pub fn answer(value: &FieldValue) -> ValidationResult {
    check_text(value, ErrorKind::InvalidAnswer, |text| {
        is_ipv4(text) || is_ipv6(text) || is_host(text)
    })
}

pub fn filter_url(value: &FieldValue) -> ValidationResult {
    check_text(value, ErrorKind::InvalidUrl, is_url_with_protocol)
}

pub fn is_positive(value: &FieldValue) -> ValidationResult {
    if !is_present(value) {
        return Ok(());
    }
    match value.as_number() {
        Some(n) if n <= 0.0 => Err(ErrorKind::NotPositive),
        _ => Ok(()),
    }
}

pub fn bigger_or_equal_zero(value: &FieldValue) -> ValidationResult {
    match value.as_number() {
        Some(n) if n < 0.0 => Err(ErrorKind::Negative),
        _ => Ok(()),
    }
}

pub fn port(value: &FieldValue) -> ValidationResult {
    if !is_present(value) {
        return Ok(());
    }
    check_port_range(value)
}

/// Like [`port`], but `0` is accepted: it switches the listener off.
pub fn port_tls(value: &FieldValue) -> ValidationResult {
    if value.is_zero() || !value.is_truthy() {
        return Ok(());
    }
    check_port_range(value)
}

pub fn is_safe_port(value: &FieldValue) -> ValidationResult {
    let unsafe_port = value
        .as_number()
        .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= MAX_PORT)
        .is_some_and(|n| UNSAFE_PORTS.contains(&(n as u16)));

    if unsafe_port {
        return Err(ErrorKind::UnsafePort);
    }
    Ok(())
}

/// Parses the leading integer of a text field; empty or non-numeric input stays `None`.
pub fn to_number(value: Option<&str>) -> Option<i64> {
    let text = value.filter(|v| !v.is_empty())?.trim_start();
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

fn is_present(value: &FieldValue) -> bool {
    value.is_truthy() || value.is_zero()
}

fn check_port_range(value: &FieldValue) -> ValidationResult {
    match value.as_number() {
        Some(n) if !(MIN_PORT..=MAX_PORT).contains(&n) => Err(ErrorKind::PortRange),
        _ => Ok(()),
    }
}

fn check_text(value: &FieldValue, kind: ErrorKind, is_valid: impl Fn(&str) -> bool) -> ValidationResult {
    if !value.is_truthy() {
        return Ok(());
    }
    match value.as_text() {
        Some(text) if !is_valid(&text) => Err(kind),
        _ => Ok(()),
    }
}
