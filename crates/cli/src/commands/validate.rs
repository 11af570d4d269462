use clap::ValueEnum;
use guardview_application::normalizers::{compare_versions, is_version_greater};
use guardview_application::validators::{self, to_number, Validator};
use guardview_domain::{Config, FieldValue};
use serde::Serialize;

use super::print_json;
use crate::bootstrap::message_catalog;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ValidatorName {
    Required,
    Ipv4,
    Ipv6,
    Ip,
    Mac,
    Positive,
    NonNegative,
    Port,
    PortTls,
    SafePort,
    Domain,
    Answer,
    FilterUrl,
}

impl ValidatorName {
    fn validator(self) -> Validator {
        match self {
            ValidatorName::Required => validators::required,
            ValidatorName::Ipv4 => validators::ipv4,
            ValidatorName::Ipv6 => validators::ipv6,
            ValidatorName::Ip => validators::ip,
            ValidatorName::Mac => validators::mac,
            ValidatorName::Positive => validators::is_positive,
            ValidatorName::NonNegative => validators::bigger_or_equal_zero,
            ValidatorName::Port => validators::port,
            ValidatorName::PortTls => validators::port_tls,
            ValidatorName::SafePort => validators::is_safe_port,
            ValidatorName::Domain => validators::domain,
            ValidatorName::Answer => validators::answer,
            ValidatorName::FilterUrl => validators::filter_url,
        }
    }

    /// Numeric fields go through the same integer normalizer the forms use.
    fn is_numeric(self) -> bool {
        matches!(
            self,
            ValidatorName::Positive
                | ValidatorName::NonNegative
                | ValidatorName::Port
                | ValidatorName::PortTls
                | ValidatorName::SafePort
        )
    }

    fn field_value(self, raw: Option<&str>) -> FieldValue {
        if self.is_numeric() {
            FieldValue::from(to_number(raw))
        } else {
            FieldValue::from(raw)
        }
    }
}

#[derive(Serialize)]
struct ValidationReport<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

pub fn run(name: ValidatorName, raw: Option<&str>, config: &Config) -> anyhow::Result<()> {
    let catalog = message_catalog(config)?;
    let value = name.field_value(raw);

    let report = match (name.validator())(&value) {
        Ok(()) => ValidationReport {
            valid: true,
            error: None,
            message: None,
        },
        Err(kind) => ValidationReport {
            valid: false,
            error: Some(kind.translation_key()),
            message: Some(catalog.resolve(kind)),
        },
    };
    print_json(&report)
}

#[derive(Serialize)]
struct VersionReport {
    ordering: &'static str,
    update_available: bool,
}

pub fn version_check(current: &str, latest: &str) -> anyhow::Result<()> {
    let ordering = match compare_versions(current, latest) {
        std::cmp::Ordering::Less => "older",
        std::cmp::Ordering::Equal => "same",
        std::cmp::Ordering::Greater => "newer",
    };
    print_json(&VersionReport {
        ordering,
        update_available: is_version_greater(current, latest),
    })
}
