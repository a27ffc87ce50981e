use serde::Deserialize;

/// Application configuration for the travel-planning backend.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// SQLite database URL.
    pub database_url: String,
    /// Photo-search provider settings.
    pub pexels: PexelsConfig,
}

/// Settings for the Pexels photo-search client.
#[derive(Debug, Clone, Deserialize)]
pub struct PexelsConfig {
    /// API key sent in the `Authorization` header.
    pub api_key: String,
    /// Base endpoint, overridable for tests.
    #[serde(default = "default_pexels_endpoint")]
    pub endpoint: String,
}

fn default_pexels_endpoint() -> String {
    "https://api.pexels.com/v1".to_string()
}

impl AppConfig {
    /// Load configuration from an optional YAML file plus `TRIPMIND_*`
    /// environment overrides (e.g. `TRIPMIND_PEXELS__API_KEY`).
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("TRIPMIND").separator("__"))
            .build()?
            .try_deserialize()
    }
}
