//! HTTP server adapters
//!
//! This module provides adapters that translate between HTTP frameworks
//! and the HTTP-agnostic webhook handler layer.
//!
//! Currently supported:
//! - `tiny_http` - Lightweight synchronous HTTP server

mod tiny_http;

pub use tiny_http::serve;
