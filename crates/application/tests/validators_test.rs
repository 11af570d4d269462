use guardview_application::validators::{
    answer, bigger_or_equal_zero, domain, filter_url, ip, ipv4, ipv6, is_positive, is_safe_port,
    mac, port, port_tls, required, validate, Validator,
};
use guardview_domain::{ErrorKind, FieldValue};

fn text(value: &str) -> FieldValue {
    FieldValue::from(value)
}

fn num(value: i64) -> FieldValue {
    FieldValue::from(value)
}

#[test]
fn test_required() {
    assert_eq!(required(&FieldValue::Absent), Err(ErrorKind::Required));
    assert_eq!(required(&text("")), Err(ErrorKind::Required));
    assert_eq!(required(&FieldValue::from(false)), Err(ErrorKind::Required));
    assert_eq!(required(&num(0)), Ok(()));
    assert_eq!(required(&text("x")), Ok(()));
}

#[test]
fn test_ipv4() {
    for valid in ["0.0.0.0", "192.168.1.1", "255.255.255.255", "10.0.0.1"] {
        assert_eq!(ipv4(&text(valid)), Ok(()), "{}", valid);
    }
    for invalid in ["256.0.0.1", "01.2.3.4", "1.2.3", "1.2.3.4.", "1.2.3.4.5", "a.b.c.d"] {
        assert_eq!(ipv4(&text(invalid)), Err(ErrorKind::InvalidIpv4), "{}", invalid);
    }
}

#[test]
fn test_ipv6() {
    assert_eq!(ipv6(&text("::1")), Ok(()));
    assert_eq!(ipv6(&text("2001:db8::8a2e:370:7334")), Ok(()));
    assert_eq!(ipv6(&text("::ffff:192.168.1.1")), Ok(()));
    assert_eq!(ipv6(&text("2001:db8:::1")), Err(ErrorKind::InvalidIpv6));
    assert_eq!(ipv6(&text("192.168.1.1")), Err(ErrorKind::InvalidIpv6));
}

#[test]
fn test_ip_accepts_both_families() {
    assert_eq!(ip(&text("10.0.0.1")), Ok(()));
    assert_eq!(ip(&text("fd00::1")), Ok(()));
    assert_eq!(ip(&text("example.org")), Err(ErrorKind::InvalidIp));
}

#[test]
fn test_mac() {
    for valid in ["aa:bb:cc:dd:ee:ff", "AA-BB-CC-DD-EE-FF", "aabb.ccdd.eeff"] {
        assert_eq!(mac(&text(valid)), Ok(()), "{}", valid);
    }
    for invalid in ["aa:bb-cc:dd:ee:ff", "aa:bb:cc:dd:ee", "gg:bb:cc:dd:ee:ff"] {
        assert_eq!(mac(&text(invalid)), Err(ErrorKind::InvalidMac), "{}", invalid);
    }
}

#[test]
fn test_domain_and_answer() {
    assert_eq!(domain(&text("example.org")), Ok(()));
    assert_eq!(domain(&text("*.example.org")), Ok(()));
    assert_eq!(domain(&text("-bad.example")), Err(ErrorKind::InvalidDomain));
    assert_eq!(domain(&text("exa mple.org")), Err(ErrorKind::InvalidDomain));

    assert_eq!(answer(&text("93.184.216.34")), Ok(()));
    assert_eq!(answer(&text("2001:db8::1")), Ok(()));
    assert_eq!(answer(&text("cdn.example.net")), Ok(()));
    assert_eq!(answer(&text("not valid!")), Err(ErrorKind::InvalidAnswer));
}

#[test]
fn test_format_validators_ignore_empty() {
    let validators: [Validator; 7] = [ipv4, ipv6, ip, mac, domain, answer, filter_url];
    for validator in validators {
        assert_eq!(validator(&FieldValue::Absent), Ok(()));
        assert_eq!(validator(&text("")), Ok(()));
    }
}

#[test]
fn test_filter_url() {
    assert_eq!(filter_url(&text("https://lists.example/a.txt")), Ok(()));
    assert_eq!(filter_url(&text("http://10.0.0.1:8080")), Ok(()));
    assert_eq!(filter_url(&text("ftp://lists.example/a.txt")), Err(ErrorKind::InvalidUrl));
    assert_eq!(filter_url(&text("lists.example/a.txt")), Err(ErrorKind::InvalidUrl));
}

#[test]
fn test_is_positive() {
    assert_eq!(is_positive(&num(1)), Ok(()));
    assert_eq!(is_positive(&num(0)), Err(ErrorKind::NotPositive));
    assert_eq!(is_positive(&text("-3")), Err(ErrorKind::NotPositive));
    assert_eq!(is_positive(&FieldValue::Absent), Ok(()));
}

#[test]
fn test_bigger_or_equal_zero() {
    assert_eq!(bigger_or_equal_zero(&num(0)), Ok(()));
    assert_eq!(bigger_or_equal_zero(&num(10)), Ok(()));
    assert_eq!(bigger_or_equal_zero(&num(-1)), Err(ErrorKind::Negative));
    assert_eq!(bigger_or_equal_zero(&FieldValue::Absent), Ok(()));
}

#[test]
fn test_port_range_boundaries() {
    for p in [0, 1, 53, 79, 65536, 70000] {
        assert_eq!(port(&num(p)), Err(ErrorKind::PortRange), "{}", p);
    }
    for p in [80, 443, 3000, 65535] {
        assert_eq!(port(&num(p)), Ok(()), "{}", p);
    }
    assert_eq!(port(&text("8080")), Ok(()));
    assert_eq!(port(&FieldValue::Absent), Ok(()));
}

#[test]
fn test_port_tls_accepts_zero() {
    assert_eq!(port_tls(&num(0)), Ok(()));
    assert_eq!(port_tls(&FieldValue::Absent), Ok(()));
    assert_eq!(port_tls(&num(443)), Ok(()));
    assert_eq!(port_tls(&num(79)), Err(ErrorKind::PortRange));
    assert_eq!(port_tls(&num(65536)), Err(ErrorKind::PortRange));
}

#[test]
fn test_is_safe_port() {
    assert_eq!(is_safe_port(&num(22)), Err(ErrorKind::UnsafePort));
    assert_eq!(is_safe_port(&num(6667)), Err(ErrorKind::UnsafePort));
    assert_eq!(is_safe_port(&text("53")), Err(ErrorKind::UnsafePort));
    assert_eq!(is_safe_port(&num(8443)), Ok(()));
    assert_eq!(is_safe_port(&FieldValue::Absent), Ok(()));
}

#[test]
fn test_chained_validation_stops_at_first_error() {
    let chain: [Validator; 3] = [required, port, is_safe_port];

    assert_eq!(validate(&FieldValue::Absent, &chain), Err(ErrorKind::Required));
    assert_eq!(validate(&num(22), &chain), Err(ErrorKind::PortRange));
    assert_eq!(validate(&num(6666), &chain), Err(ErrorKind::UnsafePort));
    assert_eq!(validate(&num(8080), &chain), Ok(()));
}
