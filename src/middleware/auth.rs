//! Credential and shared-secret gating middleware
//!
//! Validates the configured Stripe key and, when configured, an inbound
//! shared-secret header. Never runs for CORS preflights.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::{error::AppError, AppState};

/// Validate the configured Stripe key
///
/// Only restricted keys (`rk_` prefix) are accepted. Full-access keys are
/// rejected even if syntactically valid, to bound the blast radius if the
/// relay's key ever leaks.
pub fn validate_api_key(api_key: Option<&str>) -> Result<&str, AppError> {
    let api_key = api_key.ok_or(AppError::ApiKeyMissing)?;
    if !api_key.starts_with("rk_") {
        return Err(AppError::ApiKeyNotRestricted);
    }
    Ok(api_key)
}

/// Check the inbound shared-secret header against the expected value
///
/// Header lookup is case-insensitive. An absent header never matches, so a
/// caller cannot pass the gate by omitting the header.
pub fn shared_secret_matches(headers: &HeaderMap, name: &str, expected: &str) -> bool {
    headers
        .get(name)
        .map(|presented| presented.as_bytes() == expected.as_bytes())
        .unwrap_or(false)
}

/// Gating middleware
///
/// This middleware:
/// 1. Lets OPTIONS requests through untouched (the preflight branch answers them)
/// 2. Rejects requests with 500 when the Stripe key is missing or not restricted
/// 3. Rejects requests with 401 when a configured shared secret does not match
///
/// When only one half of the shared-secret pair is configured, the gate is
/// skipped entirely. That fail-open behavior is deliberate and matches the
/// deployed contract; see DESIGN.md.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if request.method() == Method::OPTIONS {
        return Ok(next.run(request).await);
    }

    validate_api_key(state.config.api_key())?;

    if let Some((name, expected)) = state.config.shared_secret() {
        if !shared_secret_matches(request.headers(), name, expected) {
            warn!(header = %name, "Shared-secret check failed");
            return Err(AppError::Unauthorized);
        }
        debug!(header = %name, "Shared-secret check passed");
    }

    Ok(next.run(request).await)
}
