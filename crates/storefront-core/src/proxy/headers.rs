use axum::http::{header, HeaderMap, HeaderName};

/// Headers that only make sense for a single transport connection.
pub const HOP_BY_HOP_HEADERS: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailers",
    "transfer-encoding",
    "upgrade",
];

pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    // HeaderName is always lowercase
    HOP_BY_HOP_HEADERS.contains(&name.as_str())
}

/// Copy upstream response headers for relaying to the caller.
///
/// Hop-by-hop headers are dropped, and so is `content-length`, which is
/// recomputed for the relayed body.
pub fn relay_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut relayed = HeaderMap::with_capacity(upstream.len());
    for (name, value) in upstream {
        if is_hop_by_hop(name) || name == header::CONTENT_LENGTH {
            continue;
        }
        relayed.append(name.clone(), value.clone());
    }
    relayed
}
