//! Middleware module
//!
//! Contains Tower middleware for credential gating and the CORS overlay.

pub mod auth;
pub mod cors;
