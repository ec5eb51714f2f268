//! API configuration

use serde::Deserialize;

use core_kernel::{CoreError, DataSourceConfig};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT secret for authentication
    pub jwt_secret: String,
    /// JWT expiration in seconds
    pub jwt_expiration_secs: u64,
    /// Claim registry backend: "memory" (or "mock") for the in-process
    /// adapters, "external" for an upstream claims system
    pub data_source: String,
    /// Base URL of the external claims system, required when
    /// `data_source` is "external"
    pub external_base_url: Option<String>,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            data_source: "memory".to_string(),
            external_base_url: None,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolves the configured registry backend
    pub fn data_source_config(&self) -> Result<DataSourceConfig, CoreError> {
        DataSourceConfig::from_name(&self.data_source, self.external_base_url.as_deref()).ok_or_else(
            || {
                CoreError::Configuration(format!(
                    "unsupported data source '{}' (expected 'memory' or 'external' with a base URL)",
                    self.data_source
                ))
            },
        )
    }
}
