use serde::{Deserialize, Serialize};

use super::display::DisplayConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::network::NetworkConfig;
use super::redirect::RedirectConfig;

const LOCAL_CONFIG_PATH: &str = "guardview.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/guardview/config.toml";

/// Main configuration structure for the GuardView console tooling
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Locale, timezone and placeholders used when rendering view models
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub network: NetworkConfig,

    /// Limits for the post-TLS-change redirect check
    #[serde(default)]
    pub redirect: RedirectConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. guardview.toml in current directory
    /// 3. /etc/guardview/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match Self::get_config_path(path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(locale) = overrides.locale {
            self.display.locale = locale;
        }
        if let Some(timezone) = overrides.timezone {
            self.display.timezone = timezone;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network.http_port == 0 {
            return Err(ConfigError::Validation("HTTP port cannot be 0".to_string()));
        }

        if self.redirect.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "Redirect max_attempts must be at least 1".to_string(),
            ));
        }

        self.display
            .parse_locale()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        self.display
            .parse_timezone()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Path `load` reads from: the explicit path, else the first existing
    /// default location, else `None` for built-in defaults
    pub fn get_config_path(path: Option<&str>) -> Option<String> {
        if let Some(path) = path {
            return Some(path.to_string());
        }

        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| std::path::Path::new(candidate).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub locale: Option<String>,
    pub timezone: Option<String>,
    pub log_level: Option<String>,
}
