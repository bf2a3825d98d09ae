//! Relay module
//!
//! Header rewriting and request forwarding to the Stripe API.

pub mod client;
pub mod headers;

pub use client::StripeClient;
