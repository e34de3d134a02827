mod client;

pub use client::{build_http_client, build_url, UpstreamClient, UpstreamReply, UpstreamRequest};
