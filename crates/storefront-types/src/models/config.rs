//! Application, server and proxy configuration models.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_UPSTREAM_BASE_URL: &str =
    "https://my-elasticsearch-project-ad20fd.es.us-central1.gcp.elastic.cloud:443";
pub const DEFAULT_UPSTREAM_PATH: &str = "/true_th_api_1_products/_search";

/// Environment variable holding the upstream API key.
pub const DEFAULT_PRIMARY_KEY_VAR: &str = "SEARCH_API_KEY";
/// Legacy variable name still honoured when the primary one is unset.
pub const DEFAULT_LEGACY_KEY_VAR: &str = "VITE_API_KEY";

// ============================================================================
// Enums
// ============================================================================

/// Deployment environment, controlling how much detail error bodies carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentEnv {
    /// Minimal error bodies
    Production,
    /// Error bodies echo upstream text and failure messages
    #[default]
    NonProduction,
}

impl DeploymentEnv {
    /// Parse an environment flag. Only the exact value `production` selects
    /// [`DeploymentEnv::Production`]; anything else is non-production.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "production" {
            Self::Production
        } else {
            Self::NonProduction
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for DeploymentEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentEnv::Production => write!(f, "production"),
            DeploymentEnv::NonProduction => write!(f, "non_production"),
        }
    }
}

// ============================================================================
// Structs
// ============================================================================

/// Fixed upstream search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Scheme, host and port of the search cluster
    pub base_url: String,
    /// Index search path appended to `base_url`
    pub path: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            path: DEFAULT_UPSTREAM_PATH.to_string(),
        }
    }
}

impl UpstreamConfig {
    /// Full endpoint URL (without query string).
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.path.starts_with('/') {
            format!("{}{}", base, self.path)
        } else {
            format!("{}/{}", base, self.path)
        }
    }
}

/// Search proxy configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProxyConfig {
    pub upstream: UpstreamConfig,
    /// Environment variables consulted for the API key, in priority order
    pub api_key_vars: Vec<String>,
    pub environment: DeploymentEnv,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            upstream: UpstreamConfig::default(),
            api_key_vars: vec![
                DEFAULT_PRIMARY_KEY_VAR.to_string(),
                DEFAULT_LEGACY_KEY_VAR.to_string(),
            ],
            environment: DeploymentEnv::default(),
        }
    }
}

/// HTTP listener and asset configuration for the daemon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Built storefront UI served with SPA fallback, if set
    pub static_dir: Option<String>,
    /// Frequency-ranked word list for the optional segmenter, if set
    pub wordlist: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 3000, static_dir: None, wordlist: None }
    }
}

/// Root configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub proxy: ProxyConfig,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_flag_is_exact_match() {
        assert_eq!(DeploymentEnv::from_flag("production"), DeploymentEnv::Production);
        assert_eq!(DeploymentEnv::from_flag("Production"), DeploymentEnv::NonProduction);
        assert_eq!(DeploymentEnv::from_flag("prod"), DeploymentEnv::NonProduction);
        assert_eq!(DeploymentEnv::from_flag(""), DeploymentEnv::NonProduction);
    }

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let upstream = UpstreamConfig {
            base_url: "http://127.0.0.1:9200/".to_string(),
            path: "products/_search".to_string(),
        };
        assert_eq!(upstream.endpoint(), "http://127.0.0.1:9200/products/_search");

        let default = UpstreamConfig::default();
        assert!(default.endpoint().ends_with("/true_th_api_1_products/_search"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"proxy":{"environment":"production"}}"#).unwrap();

        assert_eq!(config.proxy.environment, DeploymentEnv::Production);
        assert_eq!(config.proxy.api_key_vars, vec!["SEARCH_API_KEY", "VITE_API_KEY"]);
        assert_eq!(config.server.port, 3000);
    }
}
