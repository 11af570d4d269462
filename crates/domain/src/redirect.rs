use serde::{Deserialize, Serialize};

/// Page location the console is currently served from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentLocation {
    pub secure: bool,
    pub hostname: String,
    /// `None` when the URL carries no explicit port
    pub port: Option<u16>,
    /// Fragment including the leading `#`, or empty
    pub hash: String,
}

impl CurrentLocation {
    pub fn http(hostname: &str, port: Option<u16>) -> Self {
        Self {
            secure: false,
            hostname: hostname.to_string(),
            port,
            hash: String::new(),
        }
    }

    pub fn https(hostname: &str, port: Option<u16>) -> Self {
        Self {
            secure: true,
            ..Self::http(hostname, port)
        }
    }

    pub fn with_hash(mut self, hash: &str) -> Self {
        self.hash = hash.to_string();
        self
    }
}

/// Encryption settings submitted from the TLS form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TlsRedirectSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub port_https: Option<u16>,
}

impl TlsRedirectSettings {
    /// HTTPS port when TLS is on and a usable port is set
    pub fn active_https_port(&self) -> Option<u16> {
        self.port_https.filter(|port| self.enabled && *port != 0)
    }
}

/// What the console should do after the encryption settings changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "url", rename_all = "snake_case")]
pub enum RedirectAction {
    Stay,
    /// Wait until the URL answers, then navigate
    Probe(String),
    /// Navigate immediately
    Replace(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectOutcome {
    pub url: String,
    pub attempts: u32,
    /// `false` when the attempt cap was hit and the redirect is blind
    pub confirmed: bool,
}
