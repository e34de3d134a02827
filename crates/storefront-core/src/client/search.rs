use async_trait::async_trait;
use reqwest::{header, Client};
use std::sync::Arc;
use std::time::Duration;
use storefront_types::{ClientError, ProductCard, SearchResponse};

use super::query::{QueryDocument, SortBy, DEFAULT_PAGE_SIZE};
use crate::normalizer::QueryNormalizer;

/// Scroll window requested with every search.
const SCROLL_WINDOW: &str = "1m";

const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Anything that can turn a raw query into result cards.
///
/// Failures are reported as an empty list.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, raw: &str) -> Vec<ProductCard>;
}

/// Client for the search proxy (or the search index itself).
pub struct SearchClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    normalizer: Arc<QueryNormalizer>,
    page_size: usize,
    sort: SortBy,
}

impl SearchClient {
    /// `endpoint` is the full search URL, e.g. `http://127.0.0.1:3000/api/search`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::Http { message: e.to_string() })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: None,
            normalizer: Arc::new(QueryNormalizer::new()),
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortBy::default(),
        })
    }

    /// Send `Authorization: ApiKey <key>`. Only needed when talking to the
    /// index directly; the proxy injects its own key.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
        if self.api_key.is_none() {
            tracing::debug!("[search] no API key set, requests go out unauthenticated");
        }
        self
    }

    pub fn with_normalizer(mut self, normalizer: Arc<QueryNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_sort(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query document for a raw user query.
    pub fn document_for(&self, raw: &str) -> QueryDocument {
        QueryDocument::new(self.normalizer.normalize(raw))
            .with_size(self.page_size)
            .with_sort(self.sort)
    }

    pub async fn post_search(&self, document: &QueryDocument) -> Result<SearchResponse, ClientError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .query(&[("scroll", SCROLL_WINDOW)])
            .header(header::CONTENT_TYPE, "application/json")
            .json(document);

        if let Some(key) = &self.api_key {
            request = request.header(header::AUTHORIZATION, format!("ApiKey {}", key));
        }

        let resp = request.send().await.map_err(|e| ClientError::Http { message: e.to_string() })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| ClientError::Http { message: e.to_string() })?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        SearchResponse::from_slice(&body).map_err(|e| ClientError::Decode { message: e.to_string() })
    }

    /// Normalize, search and project to cards. Blank queries and failures
    /// yield no results.
    pub async fn search(&self, raw: &str) -> Vec<ProductCard> {
        let document = self.document_for(raw);
        if document.query.is_empty() {
            return Vec::new();
        }

        match self.post_search(&document).await {
            Ok(response) => {
                tracing::debug!(
                    "[search] '{}' → {} hits (total {:?})",
                    document.query,
                    response.hits.hits.len(),
                    response.total_hits()
                );
                response.cards()
            },
            Err(e) => {
                tracing::warn!("[search] '{}' failed: {}", document.query, e);
                Vec::new()
            },
        }
    }
}

#[async_trait]
impl SearchBackend for SearchClient {
    async fn search(&self, raw: &str) -> Vec<ProductCard> {
        SearchClient::search(self, raw).await
    }
}
