//! Core domain models for the storefront search stack.

mod config;
mod product;
mod search;

pub use config::{
    AppConfig, DeploymentEnv, ProxyConfig, ServerConfig, UpstreamConfig, DEFAULT_LEGACY_KEY_VAR,
    DEFAULT_PRIMARY_KEY_VAR, DEFAULT_UPSTREAM_BASE_URL, DEFAULT_UPSTREAM_PATH,
};
pub use product::{ProductCard, ProductView};
pub use search::{Hit, HitsEnvelope, SearchResponse};
