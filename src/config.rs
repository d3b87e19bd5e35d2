use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::decode::DEFAULT_INGREDIENT_SLOTS;

/// Public TheMealDB v1 API root
pub const DEFAULT_BASE_URL: &str = "https://themealdb.com/api/json/v1/1";

/// Client configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Root URL the `filter.php` and `lookup.php` endpoints hang off
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; transport default when unset
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Number of numbered ingredient/measure slots to read
    #[serde(default = "default_ingredient_slots")]
    pub ingredient_slots: usize,
    /// Custom User-Agent header
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
            ingredient_slots: default_ingredient_slots(),
            user_agent: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_ingredient_slots() -> usize {
    DEFAULT_INGREDIENT_SLOTS
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with DESSERTS__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: DESSERTS__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Environment variables: DESSERTS__TIMEOUT, DESSERTS__INGREDIENT_SLOTS, ...
            .add_source(
                Environment::with_prefix("DESSERTS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
