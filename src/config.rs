use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Endpoint and client settings for TheMealDB
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MealDbConfig {
    /// Base URL the `filter.php` directory endpoint hangs off
    #[serde(default = "default_directory_base_url")]
    pub directory_base_url: String,
    /// Base URL the `lookup.php` detail endpoint hangs off
    #[serde(default = "default_detail_base_url")]
    pub detail_base_url: String,
    /// Category passed to the directory endpoint
    #[serde(default = "default_category")]
    pub category: String,
    /// Request timeout in seconds; the HTTP client default applies when unset
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            directory_base_url: default_directory_base_url(),
            detail_base_url: default_detail_base_url(),
            category: default_category(),
            timeout: None,
        }
    }
}

// Default value functions
fn default_directory_base_url() -> String {
    "https://themealdb.com/api/json/v1/1".to_string()
}

fn default_detail_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_category() -> String {
    "Dessert".to_string()
}

impl MealDbConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FETCH_MEAL__ prefix
    /// 2. fetch_meal.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FETCH_MEAL__DETAIL_BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// See [`MealDbConfig::load`]
pub fn load_config() -> Result<MealDbConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("fetch_meal").required(false))
        .add_source(
            Environment::with_prefix("FETCH_MEAL")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
