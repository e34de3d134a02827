use axum::{
    body::Body,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use storefront_types::models::DeploymentEnv;
use storefront_types::ProxyError;

use super::headers::relay_headers;
use super::server::SearchProxyState;
use super::upstream::{UpstreamReply, UpstreamRequest};

/// `ANY /api/search`. Preflights never get here; see the CORS middleware.
pub async fn handle_search(
    State(state): State<SearchProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            let err = ProxyError::Internal {
                message: format!("Reading request body: {}", rejection.body_text()),
            };
            tracing::error!("[proxy] {}", err);
            return error_response(&err, state.environment);
        },
    };

    let request = UpstreamRequest::new(
        method,
        uri.query().map(str::to_string),
        headers.get(header::CONTENT_TYPE).cloned(),
        body,
    );
    let api_key = state.credentials.resolve();

    match state.upstream.forward(request, api_key.as_deref()).await {
        Ok(reply) => relay_response(reply),
        Err(err) => {
            if !matches!(err, ProxyError::UpstreamStatus { .. }) {
                tracing::error!("[proxy] search proxy failed: {}", err);
            }
            error_response(&err, state.environment)
        },
    }
}

fn relay_response(reply: UpstreamReply) -> Response {
    let mut response = Response::new(Body::from(reply.body));
    *response.status_mut() = reply.status;
    *response.headers_mut() = relay_headers(&reply.headers);
    response
}

pub(crate) fn error_response(err: &ProxyError, environment: DeploymentEnv) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err.to_body(environment))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_mirrors_upstream_status() {
        let err = ProxyError::UpstreamStatus { status: 503, body: "es down".to_string() };
        let response = error_response(&err, DeploymentEnv::Production);

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_local_failure_is_500() {
        let err = ProxyError::Transport { message: "connection refused".to_string() };
        let response = error_response(&err, DeploymentEnv::NonProduction);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_relay_response_drops_hop_by_hop_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::TRANSFER_ENCODING, "chunked".parse().unwrap());
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());

        let response = relay_response(UpstreamReply {
            status: StatusCode::OK,
            headers,
            body: Bytes::from_static(b"{}"),
        });

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::TRANSFER_ENCODING).is_none());
        assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    }
}
