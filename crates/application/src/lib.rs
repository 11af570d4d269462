//! GuardView Application Layer
//!
//! Pure normalizers and validators between the appliance's REST API and the
//! console widgets, plus the redirect check run after TLS settings change.
pub mod formatting;
pub mod normalizers;
pub mod ports;
pub mod use_cases;
pub mod validators;

pub use formatting::DisplayContext;
