//! Common test utilities for the relay
//!
//! Provides the shared test harness used by the integration tests: a
//! wiremock server standing in for the Stripe API and the real router
//! running under axum-test.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use wiremock::MockServer;

use stripe_relay::{routes, AppState, Config};

/// Test configuration constants
pub mod constants {
    /// Default restricted key used by tests
    pub const TEST_API_KEY: &str = "rk_test_1";
    /// Default shared-secret header name
    pub const TEST_SECURITY_HEADER: &str = "X-Custom-Auth";
    /// Default shared-secret value
    pub const TEST_SECURITY_VALUE: &str = "secret1";
}

/// Test harness owning the relay under test and the mock Stripe server
pub struct TestApp {
    pub server: TestServer,
    pub stripe: MockServer,
}

impl TestApp {
    /// Spawn the relay with the default test configuration: valid restricted
    /// key and the shared-secret gate fully configured.
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn the relay with a tweaked configuration
    pub async fn spawn_with(tweak: impl FnOnce(&mut Config)) -> Self {
        let stripe = MockServer::start().await;

        let mut config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            stripe_api_url: stripe.uri(),
            stripe_api_key: Some(constants::TEST_API_KEY.to_string()),
            security_header_name: Some(constants::TEST_SECURITY_HEADER.to_string()),
            security_header_value: Some(constants::TEST_SECURITY_VALUE.to_string()),
        };
        tweak(&mut config);

        let state = Arc::new(AppState::new(config).expect("Failed to create app state"));
        let app = routes::create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, stripe }
    }

    /// Requests the mock Stripe server received so far
    pub async fn upstream_requests(&self) -> Vec<wiremock::Request> {
        self.stripe
            .received_requests()
            .await
            .expect("Request recording is enabled by default")
    }
}
