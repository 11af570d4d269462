use serde::{Deserialize, Serialize};

use crate::whois::WhoisInfo;

/// Anything the client list can be sorted by name
pub trait Named {
    fn name(&self) -> &str;
}

/// Persistent client configured by the administrator
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Client {
    pub name: String,
    #[serde(default)]
    pub ip_addrs: Option<Vec<String>>,
    #[serde(default)]
    pub whois_info: WhoisInfo,
}

impl Client {
    pub fn new(name: &str, ip_addrs: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            ip_addrs: Some(ip_addrs.iter().map(|ip| ip.to_string()).collect()),
            whois_info: WhoisInfo::default(),
        }
    }

    pub fn with_whois(mut self, whois_info: WhoisInfo) -> Self {
        self.whois_info = whois_info;
        self
    }

    pub fn has_ip(&self, ip: &str) -> bool {
        self.ip_addrs
            .as_deref()
            .is_some_and(|addrs| addrs.iter().any(|addr| addr == ip))
    }
}

/// Client discovered from hosts files, ARP or DHCP leases
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AutoClient {
    pub name: String,
    pub ip: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub whois_info: WhoisInfo,
}

impl AutoClient {
    pub fn new(name: &str, ip: &str) -> Self {
        Self {
            name: name.to_string(),
            ip: ip.to_string(),
            source: None,
            whois_info: WhoisInfo::default(),
        }
    }

    pub fn with_whois(mut self, whois_info: WhoisInfo) -> Self {
        self.whois_info = whois_info;
        self
    }
}

impl Named for Client {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for AutoClient {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Name and WHOIS data shown next to a client address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientInfo {
    pub name: String,
    /// `None` when the backend has no WHOIS data for the client
    pub whois: Option<WhoisInfo>,
}

impl ClientInfo {
    pub fn from_parts(name: &str, whois_info: &WhoisInfo) -> Self {
        Self {
            name: name.to_string(),
            whois: (!whois_info.is_empty()).then(|| whois_info.clone()),
        }
    }
}
