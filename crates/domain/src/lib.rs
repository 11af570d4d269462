//! GuardView Domain Layer
//!
//! Wire shapes returned by the filtering appliance's REST API, the view models
//! rendered by the console, and the form-validation vocabulary.
pub mod client;
pub mod config;
pub mod errors;
pub mod field_value;
pub mod filtering;
pub mod messages;
pub mod network;
pub mod query_log;
pub mod question_type;
pub mod redirect;
pub mod stats;
pub mod validation;
pub mod whois;

pub use client::{AutoClient, Client, ClientInfo, Named};
pub use config::{CliOverrides, Config, ConfigError, DisplayConfig, RedirectConfig};
pub use errors::DomainError;
pub use field_value::FieldValue;
pub use filtering::{FilterView, FilteringStatus, RawFilter, RawFilteringStatus};
pub use messages::MessageCatalog;
pub use network::{
    NetworkInterface, STANDARD_DNS_PORT, STANDARD_HTTPS_PORT, STANDARD_WEB_PORT,
};
pub use query_log::{DnsAnswer, DnsQuestion, LogEntry, RawLogEntry};
pub use question_type::QuestionType;
pub use redirect::{CurrentLocation, RedirectAction, RedirectOutcome, TlsRedirectSettings};
pub use stats::{HistoryPoint, TopStatItem};
pub use validation::{ErrorKind, ValidationResult};
pub use whois::{NormalizedWhois, WhoisInfo};
