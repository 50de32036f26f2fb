//! HTTP API for the MLM commission engine
//!
//! Exposes the four commission operations plus a smoke-test route and a
//! health check over axum, mapping engine errors to HTTP status codes.

pub mod error;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{ApiError, WebServerError, WebServerResult};
pub use web::handlers::USER_ROLE_HEADER;
pub use webserver_impl::WebServer;
