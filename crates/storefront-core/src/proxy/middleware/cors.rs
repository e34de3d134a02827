//! Per-request CORS for the search endpoint.
//!
//! The allowed origin and headers are mirrored from the inbound request and
//! credentials are allowed, which a static `CorsLayer` cannot express
//! together with a `*` fallback and a 204 preflight.

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const ALLOWED_METHODS: &str = "GET,POST,PUT,PATCH,DELETE,OPTIONS";
pub const DEFAULT_ALLOWED_HEADERS: &str = "Content-Type,Authorization";

/// CORS headers computed from one inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsHeaders {
    allow_origin: HeaderValue,
    allow_headers: HeaderValue,
}

impl CorsHeaders {
    pub fn from_request_headers(headers: &HeaderMap) -> Self {
        let allow_origin = headers
            .get(header::ORIGIN)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static("*"));
        let allow_headers = headers
            .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ALLOWED_HEADERS));

        Self { allow_origin, allow_headers }
    }

    /// Set all four headers, overwriting anything already present.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
    }
}

/// Answer preflights with 204 and stamp CORS headers on every other response.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    let cors = CorsHeaders::from_request_headers(request.headers());

    let mut response = if request.method() == Method::OPTIONS {
        tracing::trace!("[cors] preflight {}", request.uri().path());
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    cors.apply(response.headers_mut());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_origin() {
        let cors = CorsHeaders::from_request_headers(&HeaderMap::new());
        let mut out = HeaderMap::new();
        cors.apply(&mut out);

        assert_eq!(out.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(out.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(), ALLOWED_METHODS);
        assert_eq!(
            out.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            DEFAULT_ALLOWED_HEADERS
        );
        assert_eq!(out.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
    }

    #[test]
    fn test_origin_and_requested_headers_are_mirrored() {
        let mut inbound = HeaderMap::new();
        inbound.insert(header::ORIGIN, HeaderValue::from_static("https://shop.example"));
        inbound.insert(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("content-type,x-trace-id"),
        );

        let mut out = HeaderMap::new();
        CorsHeaders::from_request_headers(&inbound).apply(&mut out);

        assert_eq!(out.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "https://shop.example");
        assert_eq!(
            out.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "content-type,x-trace-id"
        );
    }

    #[test]
    fn test_apply_overwrites_upstream_values() {
        let mut out = HeaderMap::new();
        out.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("https://es.cloud"));
        out.insert(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("false"));

        CorsHeaders::from_request_headers(&HeaderMap::new()).apply(&mut out);

        assert_eq!(out.get_all(header::ACCESS_CONTROL_ALLOW_ORIGIN).iter().count(), 1);
        assert_eq!(out.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(out.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
    }
}
