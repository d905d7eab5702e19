//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Formatting defaults.
    #[serde(default)]
    pub format: FormatConfig,
}

/// Formatting defaults applied when the caller does not specify them.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatConfig {
    /// Locale identifier used for rendering (e.g. "en-AU").
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Render amounts as balances rather than transaction amounts.
    #[serde(default = "default_balance_mode")]
    pub balance_mode: bool,
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_balance_mode() -> bool {
    true
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            balance_mode: default_balance_mode(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// then `PURSE__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PURSE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
