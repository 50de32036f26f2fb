//! HTTP layer: request DTOs and route handlers

pub mod handlers;
pub mod query;
