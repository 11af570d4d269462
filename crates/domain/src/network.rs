use serde::{Deserialize, Serialize};

pub const STANDARD_DNS_PORT: u16 = 53;
pub const STANDARD_WEB_PORT: u16 = 80;
pub const STANDARD_HTTPS_PORT: u16 = 443;

/// Network interface descriptor as listed by the appliance's setup API
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkInterface {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mtu: Option<u32>,
    #[serde(default)]
    pub hardware_address: Option<String>,
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    #[serde(default)]
    pub flags: Option<String>,
}

impl NetworkInterface {
    pub fn new(name: &str, ip_addresses: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            ip_addresses: ip_addresses.iter().map(|ip| ip.to_string()).collect(),
            ..Self::default()
        }
    }
}

/// Textual IPv6 check used by the address helpers: any colon means IPv6.
pub fn is_ipv6_literal(ip: &str) -> bool {
    ip.contains(':')
}
