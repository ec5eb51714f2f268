//! Data-source registry
//!
//! The original system routed every service call through a configuration
//! flag that selected either the mock in-memory database or a real backend
//! API. This module models that switch explicitly: `DataSource::Memory`
//! selects the in-memory adapters (the reference store), while
//! `DataSource::External` carries the configuration a remote-backend
//! adapter would need.

use std::collections::HashMap;

/// Source selection for the edit-desk registries
#[derive(Debug, Clone, Default)]
pub enum DataSource {
    /// Use the in-memory adapters (the reference store)
    #[default]
    Memory,

    /// Use an external backend API with the given configuration
    External(ExternalConfig),
}

impl DataSource {
    /// Returns true when the in-memory adapters are selected
    pub fn is_memory(&self) -> bool {
        matches!(self, DataSource::Memory)
    }
}

/// Configuration for an external backend adapter
#[derive(Debug, Clone, Default)]
pub struct ExternalConfig {
    /// Base URL of the backend API
    pub base_url: String,

    /// API key for authentication
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Number of retry attempts for transient failures
    pub retry_attempts: u32,

    /// Additional headers to include in requests
    pub headers: HashMap<String, String>,
}

impl ExternalConfig {
    /// Creates a new external config with a base URL and API key
    pub fn simple(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some(api_key.into()),
            timeout_secs: 30,
            retry_attempts: 3,
            ..Default::default()
        }
    }
}

/// Top-level data-source configuration for the service
#[derive(Debug, Clone, Default)]
pub struct DataSourceConfig {
    /// Which store backs the claim/user/audit registries
    pub source: DataSource,
}

impl DataSourceConfig {
    /// Creates a configuration backed by the in-memory store
    pub fn memory() -> Self {
        Self {
            source: DataSource::Memory,
        }
    }

    /// Creates a configuration backed by an external API
    pub fn external(config: ExternalConfig) -> Self {
        Self {
            source: DataSource::External(config),
        }
    }

    /// Parses a data-source name as it appears in environment configuration
    ///
    /// `"memory"` selects the in-memory store; `"external"` requires a base
    /// URL and produces an external configuration.
    pub fn from_name(name: &str, base_url: Option<&str>) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "memory" | "mock" => Some(Self::memory()),
            "external" => base_url.map(|url| {
                Self::external(ExternalConfig {
                    base_url: url.to_string(),
                    timeout_secs: 30,
                    retry_attempts: 3,
                    ..Default::default()
                })
            }),
            _ => None,
        }
    }
}
