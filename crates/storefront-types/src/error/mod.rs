//! Typed error definitions for the storefront search stack.
//!
//! Each domain gets its own enum; `TypedError` wraps them when a single
//! error type is needed across crate boundaries.

mod client;
mod config;
mod proxy;

pub use client::ClientError;
pub use config::ConfigError;
pub use proxy::ProxyError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a search proxy error
    #[error("Proxy error: {0}")]
    Proxy(#[from] ProxyError),

    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Wraps a search client error
    #[error("Client error: {0}")]
    Client(#[from] ClientError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Proxy(ProxyError::UpstreamStatus {
            status: 503,
            body: "es down".to_string(),
        });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Proxy"));
        assert!(json.contains("503"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = TypedError::from(ConfigError::ValidationError {
            field: "upstream.base_url".to_string(),
            message: "relative URL without a base".to_string(),
        });

        let msg = format!("{}", err);
        assert!(msg.contains("upstream.base_url"));
        assert!(msg.starts_with("Config error"));
    }
}
