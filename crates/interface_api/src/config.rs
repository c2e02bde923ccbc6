//! API configuration

use serde::Deserialize;
use std::str::FromStr;

use core_kernel::{Currency, MoneyError};
use domain_billing::adapters::HttpTranscriberConfig;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// SQLite connection string
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// ISO code of the currency every price is in
    pub currency: String,
    /// Speech-to-text endpoint; voice billing is disabled when unset
    pub transcriber_url: Option<String>,
    /// Bearer token for the speech-to-text endpoint
    pub transcriber_api_key: Option<String>,
    /// Speech-to-text request timeout in seconds
    pub transcriber_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "sqlite://store.db".to_string(),
            log_level: "info".to_string(),
            currency: "INR".to_string(),
            transcriber_url: None,
            transcriber_api_key: None,
            transcriber_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `POS_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("POS").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses the configured currency code
    pub fn currency(&self) -> Result<Currency, MoneyError> {
        Currency::from_str(&self.currency)
    }

    /// Builds the transcriber settings, if a transcriber URL is configured
    pub fn transcriber(&self) -> Option<HttpTranscriberConfig> {
        let url = self.transcriber_url.as_deref()?.trim();
        if url.is_empty() {
            return None;
        }

        let mut config = HttpTranscriberConfig::new(url).timeout_secs(self.transcriber_timeout_secs);
        if let Some(key) = &self.transcriber_api_key {
            config = config.api_key(key.clone());
        }
        Some(config)
    }
}
