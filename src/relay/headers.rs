//! Header utilities for the relay
//!
//! Rewrites the inbound header map for upstream forwarding and computes the
//! preflight `access-control-allow-headers` grant.

use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};

/// Methods advertised on every preflight response
pub const ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

/// Headers every caller may send, regardless of configuration
const BASE_ALLOWED_HEADERS: &[&str] = &["Content-Type", "Authorization", "Stripe-Version"];

/// Hop-by-hop headers that must never be echoed back to the client
///
/// The relay re-frames the upstream body, so connection-level headers from
/// Stripe would be wrong on the outbound response.
const HOP_BY_HOP_HEADERS: &[HeaderName] = &[
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Build the header map sent upstream
///
/// The inbound map is forwarded wholesale with three rewrites: `Host` is
/// dropped (the client sets the upstream host itself), `Content-Length` is
/// dropped (recomputed for the re-framed body), and `Authorization` is
/// overwritten with the relay's own key.
pub fn build_upstream_headers(incoming: &HeaderMap, api_key: &str) -> HeaderMap {
    let mut headers = incoming.clone();
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key)).expect("Invalid API key format"),
    );
    headers
}

/// Compute the preflight `access-control-allow-headers` value
///
/// Always grants the base set. The configured security header is appended
/// only when the caller actually asked for it in
/// `access-control-request-headers` (compared lowercase, substring match).
pub fn preflight_allow_headers(requested: Option<&HeaderValue>, security_header: Option<&str>) -> String {
    let mut allowed: Vec<&str> = BASE_ALLOWED_HEADERS.to_vec();

    if let Some(name) = security_header.filter(|n| !n.is_empty()) {
        let requested = requested
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_lowercase())
            .unwrap_or_default();
        if requested.contains(&name.to_lowercase()) {
            allowed.push(name);
        }
    }

    allowed.join(", ")
}

/// Check if a header is a hop-by-hop header that should not be forwarded
pub fn is_hop_by_hop_header(name: &HeaderName) -> bool {
    HOP_BY_HOP_HEADERS.contains(name)
}
