use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Bot configuration, built once at startup and never mutated.
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    /// Base endpoint of the drink database, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Host serving drink images
    #[serde(default = "default_asset_url")]
    pub asset_url: String,
    /// Display name the bot listens for in channel messages
    #[serde(default = "default_name")]
    pub name: String,
    /// Chat platform API token (only needed when connected to a real chat)
    #[serde(default)]
    pub chat_token: Option<String>,
    /// API key for the drink database
    #[serde(default)]
    pub addb_api_key: String,
}

fn default_base_url() -> String {
    "http://addb.absolutdrinks.com/drinks".to_string()
}

fn default_asset_url() -> String {
    "http://assets.absolutdrinks.com/drinks".to_string()
}

fn default_name() -> String {
    "drinkbot".to_string()
}

impl BotConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with DRINKBOT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: DRINKBOT__ADDB_API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("DRINKBOT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            asset_url: default_asset_url(),
            name: default_name(),
            chat_token: None,
            addb_api_key: String::new(),
        }
    }
}
