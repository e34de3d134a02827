//! Search proxy - forwards `/api/search` to the hosted search index.
//!
//! - `OPTIONS` preflights are answered locally with CORS headers
//! - every other method is relayed once to a fixed upstream endpoint, with
//!   the inbound query string, body and content type, plus an `ApiKey`
//!   authorization header when a credential is configured
//! - upstream status and body are relayed; hop-by-hop headers are dropped
//! - CORS headers are set last on every response, including errors

pub mod credentials;
pub mod handler;
pub mod headers;
pub mod middleware;
pub mod server;
pub mod upstream;

pub use credentials::{CredentialChain, CredentialSource};
pub use server::{build_search_router, SearchProxyState, SEARCH_ROUTE};
pub use upstream::{UpstreamClient, UpstreamRequest};
