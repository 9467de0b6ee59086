use serde::{Deserialize, Serialize};

use crate::utils::constants::DEFAULT_TOAST_DURATION_MS;

const DEFAULT_API_URL_DEVELOPMENT: &str = "http://localhost:3000";
const DEFAULT_API_URL_PRODUCTION: &str = "https://nexus-back-end.onrender.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
    pub log_level: String,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: DEFAULT_API_URL_DEVELOPMENT.to_string(),
            api_url_production: DEFAULT_API_URL_PRODUCTION.to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from variables captured at compile time.
    pub fn from_env() -> Self {
        Self {
            api_url_development: option_env!("API_URL_DEVELOPMENT")
                .unwrap_or(DEFAULT_API_URL_DEVELOPMENT)
                .to_string(),
            api_url_production: option_env!("API_URL_PRODUCTION")
                .unwrap_or(DEFAULT_API_URL_PRODUCTION)
                .to_string(),
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
            log_level: option_env!("LOG_LEVEL").unwrap_or("info").to_string(),
            toast_duration_ms: option_env!("TOAST_DURATION_MS")
                .unwrap_or("")
                .parse()
                .unwrap_or(DEFAULT_TOAST_DURATION_MS),
        }
    }

    /// Base URL of the remote API for the current environment, without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.api_url_production,
            _ => &self.api_url_development,
        };
        url.trim_end_matches('/')
    }

    /// Console log level; unknown values fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_is_the_default_environment() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url(), "http://localhost:3000");
    }

    #[test]
    fn production_uses_the_production_url_without_trailing_slash() {
        let config = AppConfig {
            environment: "production".to_string(),
            api_url_production: "https://api.example.com/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_base_url(), "https://api.example.com");
    }

    #[test]
    fn log_level_parsing_falls_back_to_info() {
        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);

        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
