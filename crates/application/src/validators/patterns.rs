use fancy_regex::Regex;
use std::net::Ipv6Addr;
use std::sync::LazyLock;

/// Dotted quad without leading zeros
static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((25[0-5]|(2[0-4]|1\d|[1-9]|)\d)(\.(?!$)|$)){4}$").expect("IPv4 pattern is valid")
});

/// Six colon- or hyphen-separated octets (one separator throughout) or Cisco dotted form
static MAC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{2}([:-])(?:[0-9a-fA-F]{2}\1){4}[0-9a-fA-F]{2}$|^(?:[0-9a-fA-F]{4}\.){2}[0-9a-fA-F]{4}$",
    )
    .expect("MAC pattern is valid")
});

/// Host name, optionally a `*.` wildcard
static HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\*\.)?([a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)*[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?$",
    )
    .expect("host pattern is valid")
});

static URL_WITH_PROTOCOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^/\s]+(/.*)?$").expect("URL pattern is valid")
});

/// Ports browsers refuse to connect to
pub const UNSAFE_PORTS: &[u16] = &[
    1, 7, 9, 11, 13, 15, 17, 19, 20, 21, 22, 23, 25, 37, 42, 43, 53, 77, 79, 87, 95, 101, 102,
    103, 104, 109, 110, 111, 113, 115, 117, 119, 123, 135, 139, 143, 179, 389, 465, 512, 513, 514,
    515, 526, 530, 531, 532, 540, 556, 563, 587, 601, 636, 993, 995, 2049, 3659, 4045, 6000, 6665,
    6666, 6667, 6668, 6669,
];

pub fn is_ipv4(value: &str) -> bool {
    matches(&IPV4, value)
}

pub fn is_ipv6(value: &str) -> bool {
    value.parse::<Ipv6Addr>().is_ok()
}

pub fn is_mac(value: &str) -> bool {
    matches(&MAC, value)
}

pub fn is_host(value: &str) -> bool {
    matches(&HOST, value)
}

pub fn is_url_with_protocol(value: &str) -> bool {
    matches(&URL_WITH_PROTOCOL, value)
}

// A backtracking failure counts as a mismatch.
fn matches(pattern: &Regex, value: &str) -> bool {
    pattern.is_match(value).unwrap_or(false)
}
