//! Stripe Relay - thin reverse proxy in front of the Stripe API
//!
//! This library provides the core functionality for the relay server.
//! It forwards every inbound request to the Stripe API with a restricted
//! key injected, optionally gated behind a shared-secret header, and
//! relaxes CORS on every response it returns.

pub mod config;
pub mod error;
pub mod middleware;
pub mod relay;
pub mod routes;

use std::sync::Arc;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::relay::StripeClient;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
    pub stripe_client: Arc<StripeClient>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Initialize HTTP client with connection pooling.
        // No client-level timeout: the relay imposes none of its own and
        // leaves any limit to the hosting environment.
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        // Initialize Stripe client
        let stripe_client = Arc::new(StripeClient::new(http_client.clone(), &config));

        Ok(Self {
            config,
            http_client,
            stripe_client,
        })
    }
}
