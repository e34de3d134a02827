use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use bytes::Bytes;
use storefront_types::models::UpstreamConfig;
use storefront_types::ProxyError;
use url::Url;

const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Longest upstream body echoed into the log on errors.
const LOGGED_BODY_LIMIT: usize = 2048;

/// Build the shared HTTP client used for upstream calls.
///
/// No request timeout is set: slow upstream answers are relayed, not cut off.
pub fn build_http_client() -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .tcp_nodelay(true)
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))
}

/// Append the inbound query string to the fixed endpoint.
pub fn build_url(endpoint: &str, query: Option<&str>) -> Result<Url, ProxyError> {
    let mut url = Url::parse(endpoint).map_err(|e| ProxyError::Internal {
        message: format!("Invalid upstream endpoint '{}': {}", endpoint, e),
    })?;

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        let merged = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{}&{}", existing, query),
            _ => query.to_string(),
        };
        url.set_query(Some(&merged));
    }

    Ok(url)
}

/// Everything of the inbound call that is forwarded upstream.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: Method,
    pub query: Option<String>,
    pub content_type: Option<HeaderValue>,
    /// `None` for GET/HEAD and for empty bodies
    pub body: Option<Bytes>,
}

impl UpstreamRequest {
    pub fn new(method: Method, query: Option<String>, content_type: Option<HeaderValue>, body: Bytes) -> Self {
        let body = if method == Method::GET || method == Method::HEAD || body.is_empty() {
            None
        } else {
            Some(body)
        };
        Self { method, query, content_type, body }
    }
}

/// 2xx upstream response, fully buffered.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

pub struct UpstreamClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl UpstreamClient {
    pub fn new(http_client: reqwest::Client, upstream: &UpstreamConfig) -> Self {
        Self { http_client, endpoint: upstream.endpoint() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Forward one request. Exactly one upstream call, no retries.
    pub async fn forward(
        &self,
        request: UpstreamRequest,
        api_key: Option<&str>,
    ) -> Result<UpstreamReply, ProxyError> {
        let url = build_url(&self.endpoint, request.query.as_deref())?;
        let content_type =
            request.content_type.unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

        let mut builder = self
            .http_client
            .request(request.method.clone(), url)
            .header(header::CONTENT_TYPE, content_type);

        if let Some(key) = api_key {
            let value = HeaderValue::from_str(&format!("ApiKey {}", key)).map_err(|e| {
                ProxyError::Internal { message: format!("Invalid API key header: {}", e) }
            })?;
            builder = builder.header(header::AUTHORIZATION, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        tracing::debug!(
            "[proxy] {} upstream (auth: {})",
            request.method,
            if api_key.is_some() { "api key" } else { "none" }
        );

        let response = builder
            .send()
            .await
            .map_err(|e| ProxyError::Transport { message: e.to_string() })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| ProxyError::Transport { message: format!("Reading upstream body: {}", e) })?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(
                "[proxy] upstream returned {}: {}",
                status.as_u16(),
                truncate_for_log(&text)
            );
            return Err(ProxyError::UpstreamStatus { status: status.as_u16(), body: text });
        }

        Ok(UpstreamReply { status, headers, body })
    }
}

fn truncate_for_log(text: &str) -> &str {
    if text.len() <= LOGGED_BODY_LIMIT {
        return text;
    }
    let mut end = LOGGED_BODY_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
