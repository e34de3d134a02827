//! Search client errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the search client when talking to the proxy.
///
/// Callers that render results treat every variant as "no results".
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ClientError {
    /// The request never produced a response
    #[error("Search request failed: {message}")]
    Http { message: String },

    /// The proxy answered outside 2xx
    #[error("Search returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The proxy answered 2xx with something that is not a search document
    #[error("Search response is not valid JSON: {message}")]
    Decode { message: String },
}
