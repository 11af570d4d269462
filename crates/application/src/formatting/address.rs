use guardview_domain::network::is_ipv6_literal;
use guardview_domain::{NetworkInterface, STANDARD_DNS_PORT, STANDARD_HTTPS_PORT, STANDARD_WEB_PORT};
use std::collections::BTreeMap;

/// Last IPv4 address of the interface, or its first address when it only has IPv6.
pub fn get_interface_ip(interface: &NetworkInterface) -> Option<&str> {
    interface
        .ip_addresses
        .iter()
        .rev()
        .find(|ip| !is_ipv6_literal(ip))
        .or_else(|| interface.ip_addresses.first())
        .map(String::as_str)
}

/// Every address of every interface, sorted
pub fn get_ip_list(interfaces: &BTreeMap<String, NetworkInterface>) -> Vec<String> {
    let mut list: Vec<String> = interfaces
        .values()
        .flat_map(|iface| iface.ip_addresses.iter().cloned())
        .collect();
    list.sort();
    list
}

/// Address a DNS client should be pointed at; port 53 is left implicit.
pub fn get_dns_address(ip: &str, port: Option<u16>) -> String {
    match explicit_port(port, STANDARD_DNS_PORT) {
        Some(port) => format!("{}:{}", bracket_host(ip), port),
        None => ip.to_string(),
    }
}

/// `http://` URL of the console; port 80 is left implicit.
pub fn get_web_address(ip: &str, port: Option<u16>) -> String {
    build_url("http", ip, explicit_port(port, STANDARD_WEB_PORT))
}

/// `https://` URL of the console; port 443 is left implicit.
pub fn get_secure_web_address(ip: &str, port: Option<u16>) -> String {
    build_url("https", ip, explicit_port(port, STANDARD_HTTPS_PORT))
}

fn build_url(scheme: &str, ip: &str, port: Option<u16>) -> String {
    match port {
        Some(port) => format!("{}://{}:{}", scheme, bracket_host(ip), port),
        None => format!("{}://{}", scheme, ip),
    }
}

fn explicit_port(port: Option<u16>, standard: u16) -> Option<u16> {
    port.filter(|p| *p != 0 && *p != standard)
}

fn bracket_host(ip: &str) -> String {
    if is_ipv6_literal(ip) && !ip.starts_with('[') {
        format!("[{}]", ip)
    } else {
        ip.to_string()
    }
}
