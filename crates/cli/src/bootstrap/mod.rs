use guardview_application::DisplayContext;
use guardview_domain::{CliOverrides, Config, MessageCatalog};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logs go to stderr so stdout stays machine-readable.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn display_context(config: &Config) -> anyhow::Result<DisplayContext> {
    Ok(DisplayContext::from_config(&config.display)?)
}

/// Built-in English texts, overlaid with the configured translation file
pub fn message_catalog(config: &Config) -> anyhow::Result<MessageCatalog> {
    let catalog = MessageCatalog::english();
    match config.display.translations.as_deref() {
        Some(path) => {
            let translations = MessageCatalog::from_file(path)?;
            info!(path, messages = translations.len(), "Loaded translations");
            Ok(catalog.merge(translations))
        }
        None => Ok(catalog),
    }
}
