//! Search proxy errors.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::models::DeploymentEnv;

/// Errors surfaced at the search proxy boundary.
///
/// Every variant is terminal for the inbound call: there are no retries and
/// no partial successes.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ProxyError {
    /// Upstream search engine answered outside 2xx
    #[error("Upstream returned HTTP {status}")]
    UpstreamStatus { status: u16, body: String },

    /// Network-level failure talking to the upstream (DNS, connect, reset, body read)
    #[error("Upstream request failed: {message}")]
    Transport { message: String },

    /// Local failure building the upstream request or the relayed response
    #[error("Internal proxy error: {message}")]
    Internal { message: String },
}

impl ProxyError {
    /// HTTP status returned to the caller.
    ///
    /// Upstream statuses are mirrored; every local failure is a 500.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::UpstreamStatus { status, .. } => *status,
            Self::Transport { .. } | Self::Internal { .. } => 500,
        }
    }

    /// Stable machine-readable error code placed in the `error` field.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UpstreamStatus { .. } => "upstream_error",
            Self::Transport { .. } | Self::Internal { .. } => "proxy_failed",
        }
    }

    /// JSON body sent to the caller.
    ///
    /// Production bodies carry only the error code (and the upstream status);
    /// other environments also echo the raw upstream text or the local
    /// failure message.
    pub fn to_body(&self, environment: DeploymentEnv) -> Value {
        let verbose = !environment.is_production();
        match self {
            Self::UpstreamStatus { status, body } => {
                let mut payload = json!({ "error": self.error_code(), "status": status });
                if verbose {
                    payload["upstream_body"] = Value::String(body.clone());
                }
                payload
            },
            Self::Transport { message } | Self::Internal { message } => {
                let mut payload = json!({ "error": self.error_code() });
                if verbose {
                    payload["message"] = Value::String(message.clone());
                }
                payload
            },
        }
    }
}
