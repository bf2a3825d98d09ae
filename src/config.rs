//! Configuration management for the relay
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Stripe API base URL (overridable so tests can point at a mock)
    pub stripe_api_url: String,
    /// Stripe restricted API key; validated per request, not at startup
    pub stripe_api_key: Option<String>,

    /// Name of the shared-secret header callers must present
    pub security_header_name: Option<String>,
    /// Expected value of the shared-secret header
    pub security_header_value: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("RELAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("RELAY_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid RELAY_PORT")?,

            stripe_api_url: env::var("STRIPE_API_URL")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
            stripe_api_key: env::var("STRIPE_API_KEY").ok(),

            security_header_name: env::var("SECURITY_HEADER_NAME").ok(),
            security_header_value: env::var("SECURITY_HEADER_VALUE").ok(),
        })
    }

    /// The configured API key, treating an empty string as unconfigured
    pub fn api_key(&self) -> Option<&str> {
        self.stripe_api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// The shared-secret pair, present only when both halves are configured.
    ///
    /// Partial configuration (name without value or vice versa) disables the
    /// gate entirely rather than failing closed.
    pub fn shared_secret(&self) -> Option<(&str, &str)> {
        let name = self.security_header_name.as_deref().filter(|n| !n.is_empty())?;
        let value = self.security_header_value.as_deref().filter(|v| !v.is_empty())?;
        Some((name, value))
    }
}
