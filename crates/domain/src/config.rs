pub mod display;
pub mod errors;
pub mod logging;
pub mod network;
pub mod redirect;
pub mod root;

pub use display::DisplayConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use network::NetworkConfig;
pub use redirect::RedirectConfig;
pub use root::{CliOverrides, Config};
