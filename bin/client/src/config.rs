//! Centralized client configuration.
//!
//! This module provides strongly-typed configuration for the client,
//! loaded via the `config` crate from environment variables.

use lectern_routing::NavigatorConfig;
use serde::Deserialize;

/// Client configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the platform's API gateway.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// API request timeout in seconds.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    /// Navigation configuration (denial redirect destinations).
    #[serde(default)]
    pub navigation: NavigatorConfig,
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout_seconds() -> u64 {
    10
}

impl ClientConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided value fails to parse.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
            navigation: NavigatorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_config_has_correct_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_seconds, 10);
        assert_eq!(config.navigation.home_route, "home");
        assert_eq!(config.navigation.login_route, "login");
    }
}
