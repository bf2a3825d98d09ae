//! Relay handler
//!
//! Fallback handler that answers CORS preflights locally and forwards every
//! other request to Stripe.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::{OriginalUri, State},
    http::{
        header::{
            HeaderMap, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS,
        },
        Method, StatusCode,
    },
    response::Response,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    relay::headers::{preflight_allow_headers, ALLOWED_METHODS},
    AppState,
};

/// Relay handler for every inbound request
///
/// OPTIONS requests are answered locally with the preflight grant and never
/// reach the credential gate or Stripe. Everything else is forwarded with
/// the original path and query.
pub async fn relay_handler(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    method: Method,
    headers: HeaderMap,
    request: axum::extract::Request,
) -> Result<Response, AppError> {
    if method == Method::OPTIONS {
        return preflight_response(&headers, state.config.security_header_name.as_deref());
    }

    let start_time = Instant::now();
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    info!(method = %method, path = %path_and_query, "Relaying request");

    let response = state
        .stripe_client
        .forward_raw(method.clone(), path_and_query, headers, request.into_body())
        .await?;

    info!(
        method = %method,
        path = %path_and_query,
        status = %response.status(),
        duration_ms = %format!("{:.2}", start_time.elapsed().as_secs_f64() * 1000.0),
        "Relay request completed"
    );

    Ok(response)
}

/// Synthesize the CORS preflight response
///
/// The allow-origin header set here is redundant with the outer overlay but
/// keeps the preflight complete on its own.
fn preflight_response(
    headers: &HeaderMap,
    security_header: Option<&str>,
) -> AppResult<Response> {
    let allow_headers = preflight_allow_headers(
        headers.get(ACCESS_CONTROL_REQUEST_HEADERS),
        security_header,
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS)
        .header(ACCESS_CONTROL_ALLOW_HEADERS, allow_headers)
        .body(Body::empty())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build response: {}", e)))
}
