// ============================================================================
// CONFIG - Compile-time configuration (API base URL, log level)
// ============================================================================
// Values come from option_env! (build.rs forwards .env entries) and are
// resolved exactly once into CONFIG.
// ============================================================================

use log::Level;

/// Default API address for local development (Django dev server)
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

impl AppConfig {
    /// Load configuration from the environment captured at compile time
    pub fn from_env() -> Self {
        Self::resolve(option_env!("API_BASE_URL"), option_env!("LOG_LEVEL"))
    }

    /// Build a config from raw values; blank or unparseable values fall back to defaults
    pub fn resolve(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<Level>().ok())
            .unwrap_or(Level::Info);

        Self {
            api_base_url,
            log_level,
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
