use serde::Serialize;
use std::fmt;

/// Reason a form field was rejected.
///
/// The console renders these through a translation table; the domain only
/// carries the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum ErrorKind {
    Required,
    InvalidIpv4,
    InvalidIpv6,
    InvalidIp,
    InvalidMac,
    NotPositive,
    Negative,
    PortRange,
    UnsafePort,
    InvalidDomain,
    InvalidAnswer,
    InvalidUrl,
}

/// `Ok(())` when the field is valid.
pub type ValidationResult = Result<(), ErrorKind>;

impl ErrorKind {
    pub const ALL: [ErrorKind; 12] = [
        ErrorKind::Required,
        ErrorKind::InvalidIpv4,
        ErrorKind::InvalidIpv6,
        ErrorKind::InvalidIp,
        ErrorKind::InvalidMac,
        ErrorKind::NotPositive,
        ErrorKind::Negative,
        ErrorKind::PortRange,
        ErrorKind::UnsafePort,
        ErrorKind::InvalidDomain,
        ErrorKind::InvalidAnswer,
        ErrorKind::InvalidUrl,
    ];

    pub fn translation_key(&self) -> &'static str {
        match self {
            ErrorKind::Required => "form_error_required",
            ErrorKind::InvalidIpv4 => "form_error_ip4_format",
            ErrorKind::InvalidIpv6 => "form_error_ip6_format",
            ErrorKind::InvalidIp => "form_error_ip_format",
            ErrorKind::InvalidMac => "form_error_mac_format",
            ErrorKind::NotPositive => "form_error_positive",
            ErrorKind::Negative => "form_error_negative",
            ErrorKind::PortRange => "form_error_port_range",
            ErrorKind::UnsafePort => "form_error_port_unsafe",
            ErrorKind::InvalidDomain => "form_error_domain_format",
            ErrorKind::InvalidAnswer => "form_error_answer_format",
            ErrorKind::InvalidUrl => "form_error_url_format",
        }
    }
}

impl From<ErrorKind> for &'static str {
    fn from(kind: ErrorKind) -> Self {
        kind.translation_key()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.translation_key())
    }
}

impl std::error::Error for ErrorKind {}
