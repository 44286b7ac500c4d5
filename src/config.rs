//! Connector configuration
//!
//! The config is a flat JSON document (file or inline string) holding the
//! API endpoint, the two API keys and the replication start date.
//!
//! Validation is eager: `validate()` runs at load time and parses the
//! start date and API URL before any network activity, so a malformed
//! `start_date` fails the run up front instead of at first window
//! computation mid-sync.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

/// Date format used throughout the Tilroy API (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Connector configuration loaded from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Base URL for the Tilroy API service
    pub api_url: String,

    /// Token for the `Tilroy-Api-Key` header
    pub tilroy_api_key: String,

    /// AWS gateway key for the `x-api-key` header
    pub x_api_key: String,

    /// Absolute replication start date (`YYYY-MM-DD`), used when a stream
    /// has no bookmark yet
    pub start_date: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("tilroy-connector/{}", env!("CARGO_PKG_VERSION"))
}

impl ConnectorConfig {
    /// Load and validate a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
            message: format!(
                "Failed to read config file {}: {e}",
                path.as_ref().display()
            ),
        })?;
        Self::from_json(&contents)
    }

    /// Validate all config values, failing fast before any network call
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(Error::missing_field("api_url"));
        }
        if self.tilroy_api_key.trim().is_empty() {
            return Err(Error::missing_field("tilroy_api_key"));
        }
        if self.x_api_key.trim().is_empty() {
            return Err(Error::missing_field("x_api_key"));
        }

        Url::parse(&self.api_url)
            .map_err(|e| Error::invalid_value("api_url", e.to_string()))?;

        self.start_date()?;

        Ok(())
    }

    /// The configured start date as a calendar date
    pub fn start_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.start_date, DATE_FORMAT).map_err(|e| {
            Error::invalid_value(
                "start_date",
                format!("expected YYYY-MM-DD, got '{}': {e}", self.start_date),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_json() -> String {
        serde_json::json!({
            "api_url": "https://api.tilroy.example",
            "tilroy_api_key": "tk-123",
            "x_api_key": "xk-456",
            "start_date": "2024-01-01"
        })
        .to_string()
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = ConnectorConfig::from_json(&valid_json()).unwrap();
        assert_eq!(config.api_url, "https://api.tilroy.example");
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.user_agent.starts_with("tilroy-connector/"));
        assert_eq!(
            config.start_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_malformed_start_date_fails_at_load() {
        let json = serde_json::json!({
            "api_url": "https://api.tilroy.example",
            "tilroy_api_key": "tk-123",
            "x_api_key": "xk-456",
            "start_date": "01/01/2024"
        })
        .to_string();

        let err = ConnectorConfig::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("start_date"));
    }

    #[test]
    fn test_missing_key_rejected() {
        let json = serde_json::json!({
            "api_url": "https://api.tilroy.example",
            "tilroy_api_key": "",
            "x_api_key": "xk-456",
            "start_date": "2024-01-01"
        })
        .to_string();

        let err = ConnectorConfig::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("tilroy_api_key"));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let json = serde_json::json!({
            "api_url": "not a url",
            "tilroy_api_key": "tk-123",
            "x_api_key": "xk-456",
            "start_date": "2024-01-01"
        })
        .to_string();

        let err = ConnectorConfig::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("api_url"));
    }
}
