//! # Storefront Core
//!
//! Server-side logic for the storefront search stack.
//!
//! ```text
//! storefront-core/src/
//! ├── normalizer/   # raw query → normalized query (regex passes + word segmentation)
//! ├── proxy/        # /api/search forwarder: CORS, credentials, hop-by-hop filtering
//! └── client/       # query documents, search client, debounced search sessions
//! ```
//!
//! The UI layer calls [`normalizer::normalize`], builds a query document,
//! posts it through the proxy and renders the decoded hits.

#![allow(clippy::map_err_ignore, reason = "Error context is provided in the replacement message")]
#![cfg_attr(test, allow(clippy::panic, clippy::float_cmp))]

pub mod client;
pub mod normalizer;
pub mod proxy;

// Re-export commonly used types
pub use client::{suggest, QueryDocument, SearchBackend, SearchClient, SearchSession, SortBy};
pub use normalizer::{normalize, normalize_value, QueryNormalizer, Segmenter};
pub use proxy::{build_search_router, CredentialChain, SearchProxyState};
pub use storefront_types::{ProductCard, ProductView, SearchResponse};
