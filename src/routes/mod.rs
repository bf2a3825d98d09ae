//! HTTP routes for the relay
//!
//! There is no route table: every method and path lands on the relay
//! handler and is forwarded verbatim to Stripe.

pub mod relay;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{auth::auth_middleware, cors::cors_overlay},
    AppState,
};

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Layers run outside-in: tracing, then the CORS overlay (so it stamps
    // gate rejections too), then the credential gate, then the handler.
    Router::new()
        .fallback(relay::relay_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(middleware::map_response(cors_overlay))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
