//! # Storefront Types
//!
//! Core types, models, and error definitions for the storefront search stack.
//!
//! - **`error`** - Typed error hierarchy for the proxy, configuration and search client
//! - **`models`** - Configuration, search-response documents and product projections
//!
//! ## Architecture Role
//!
//! `storefront-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!        storefront-types (this crate)
//!                │
//!                ▼
//!         storefront-core
//!                │
//!                ▼
//!        storefront-server
//! ```

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ClientError, ConfigError, ProxyError, Result, TypedError};

// Re-export core model types
pub use models::{
    AppConfig, DeploymentEnv, Hit, HitsEnvelope, ProductCard, ProductView, ProxyConfig,
    SearchResponse, ServerConfig, UpstreamConfig,
};
