//! Application State
//!
//! Shared, read-only state: the effective config, the query normalizer and
//! the search proxy.

use std::sync::Arc;
use storefront_core::normalizer::{FrequencySegmenter, QueryNormalizer};
use storefront_core::proxy::SearchProxyState;
use storefront_types::models::AppConfig;
use storefront_types::Result;

use crate::config;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub config: AppConfig,
    pub normalizer: Arc<QueryNormalizer>,
    pub proxy: SearchProxyState,
}

impl AppState {
    /// Validates `config` before building the proxy.
    pub fn new(config: AppConfig) -> Result<Self> {
        config::validate(&config)?;
        let normalizer = Arc::new(build_normalizer(config.server.wordlist.as_deref()));
        let proxy = SearchProxyState::from_config(&config.proxy)?;

        Ok(Self::with_components(config, normalizer, proxy))
    }

    pub fn with_components(
        config: AppConfig,
        normalizer: Arc<QueryNormalizer>,
        proxy: SearchProxyState,
    ) -> Self {
        Self { inner: Arc::new(AppStateInner { config, normalizer, proxy }) }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn normalizer(&self) -> &QueryNormalizer {
        &self.inner.normalizer
    }

    pub fn proxy(&self) -> &SearchProxyState {
        &self.inner.proxy
    }
}

/// Normalizer with the word-list segmenter when one is configured and
/// loadable. A bad word list only costs segmentation quality.
pub fn build_normalizer(wordlist: Option<&str>) -> QueryNormalizer {
    let normalizer = QueryNormalizer::new();
    let Some(path) = wordlist else {
        return normalizer;
    };

    match FrequencySegmenter::from_file(path) {
        Ok(segmenter) if !segmenter.is_empty() => {
            tracing::info!("📖 Loaded {} ranked words from {}", segmenter.len(), path);
            normalizer.with_segmenter(Arc::new(segmenter))
        },
        Ok(_) => {
            tracing::warn!("⚠️ Word list {} is empty, using dictionary fallback only", path);
            normalizer
        },
        Err(e) => {
            tracing::warn!("⚠️ Could not load word list {}: {}", path, e);
            normalizer
        },
    }
}
