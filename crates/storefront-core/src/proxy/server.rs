use axum::{extract::DefaultBodyLimit, routing::any, Router};
use std::sync::Arc;
use storefront_types::models::{DeploymentEnv, ProxyConfig};
use storefront_types::ProxyError;

use super::credentials::CredentialChain;
use super::handler::handle_search;
use super::middleware::cors_middleware;
use super::upstream::{build_http_client, UpstreamClient};

pub const SEARCH_ROUTE: &str = "/api/search";

/// Search documents are small; anything bigger is a client bug.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Shared, read-only state of the search proxy.
#[derive(Clone)]
pub struct SearchProxyState {
    pub upstream: Arc<UpstreamClient>,
    pub credentials: Arc<CredentialChain>,
    pub environment: DeploymentEnv,
}

impl SearchProxyState {
    pub fn new(
        upstream: UpstreamClient,
        credentials: CredentialChain,
        environment: DeploymentEnv,
    ) -> Self {
        Self { upstream: Arc::new(upstream), credentials: Arc::new(credentials), environment }
    }

    pub fn from_config(config: &ProxyConfig) -> Result<Self, ProxyError> {
        let http_client = build_http_client()
            .map_err(|message| ProxyError::Internal { message })?;
        let upstream = UpstreamClient::new(http_client, &config.upstream);
        let credentials = CredentialChain::from_env_vars(&config.api_key_vars);

        tracing::info!(
            "[proxy] upstream {} (credentials {}, environment {})",
            upstream.endpoint(),
            credentials,
            config.environment
        );

        Ok(Self::new(upstream, credentials, config.environment))
    }
}

/// Router serving [`SEARCH_ROUTE`] for every method.
pub fn build_search_router(state: SearchProxyState) -> Router<()> {
    Router::new()
        .route(SEARCH_ROUTE, any(handle_search))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(axum::middleware::from_fn(cors_middleware))
        .with_state(state)
}
