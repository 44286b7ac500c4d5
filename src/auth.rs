//! API key authentication
//!
//! The Tilroy API authenticates every request with two static header keys;
//! there is no token exchange or refresh.

use crate::config::ConnectorConfig;
use std::collections::HashMap;

/// Builds the fixed header set applied to every request
#[derive(Debug, Clone)]
pub struct ApiKeyAuth {
    tilroy_api_key: String,
    x_api_key: String,
}

impl ApiKeyAuth {
    /// Create an authenticator from config values
    pub fn new(tilroy_api_key: impl Into<String>, x_api_key: impl Into<String>) -> Self {
        Self {
            tilroy_api_key: tilroy_api_key.into(),
            x_api_key: x_api_key.into(),
        }
    }

    /// Create an authenticator for a connector config
    pub fn from_config(config: &ConnectorConfig) -> Self {
        Self::new(&config.tilroy_api_key, &config.x_api_key)
    }

    /// The headers for an authenticated request
    pub fn headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Tilroy-Api-Key".to_string(), self.tilroy_api_key.clone());
        headers.insert("x-api-key".to_string(), self.x_api_key.clone());
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_set() {
        let auth = ApiKeyAuth::new("tk-123", "xk-456");
        let headers = auth.headers();

        assert_eq!(headers.get("Tilroy-Api-Key").map(String::as_str), Some("tk-123"));
        assert_eq!(headers.get("x-api-key").map(String::as_str), Some("xk-456"));
        assert_eq!(
            headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(headers.len(), 3);
    }
}
