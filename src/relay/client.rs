//! Stripe API client
//!
//! Forwards raw requests to the Stripe API with the relay's credentials.

use axum::body::Body;
use axum::http::{HeaderMap, Method, Response};
use http_body_util::BodyExt;
use tracing::{debug, error, info, instrument};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    relay::headers::{build_upstream_headers, is_hop_by_hop_header},
};

/// Client for the fixed Stripe upstream
pub struct StripeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.stripe_api_url.clone(),
            api_key: config.api_key().map(str::to_string),
        }
    }

    /// Forward a raw request to Stripe
    ///
    /// The original path and query are appended verbatim to the upstream
    /// origin. Redirects are followed; no timeout is imposed here. The
    /// upstream status and body come back untouched, with hop-by-hop
    /// headers filtered out of the re-framed response.
    #[instrument(skip(self, incoming_headers, body), fields(method = %method, path = %path_and_query))]
    pub async fn forward_raw(
        &self,
        method: Method,
        path_and_query: &str,
        incoming_headers: HeaderMap,
        body: Body,
    ) -> AppResult<Response<Body>> {
        // Unreachable behind the gating middleware, but the client stands on
        // its own for direct library use.
        let api_key = self.api_key.as_deref().ok_or(AppError::ApiKeyMissing)?;

        let url = format!("{}{}", self.base_url, path_and_query);
        let headers = build_upstream_headers(&incoming_headers, api_key);

        // Collect the inbound body so reqwest can frame it
        let body_bytes = body
            .collect()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to read request body: {}", e)))?
            .to_bytes();

        debug!(
            url = %url,
            body_len = body_bytes.len(),
            "Forwarding request to Stripe"
        );

        let mut request_builder = self.client.request(method.clone(), &url).headers(headers);

        // GET and HEAD are forwarded bodiless even if the caller sent one
        if method != Method::GET && method != Method::HEAD {
            request_builder = request_builder.body(body_bytes);
        }

        let response = request_builder.send().await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to send request to Stripe");
            e
        })?;

        let status = response.status();
        info!(url = %url, status = %status, "Received response from Stripe");

        self.convert_response(response)
    }

    /// Convert a reqwest response to an axum response, streaming the body
    fn convert_response(&self, response: reqwest::Response) -> AppResult<Response<Body>> {
        let mut builder = Response::builder().status(response.status());

        for (name, value) in response.headers() {
            if !is_hop_by_hop_header(name) {
                builder = builder.header(name.clone(), value.clone());
            }
        }

        let body = Body::from_stream(response.bytes_stream());

        builder
            .body(body)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build response: {}", e)))
    }
}
