use axum::{extract::State, response::Json};
use chrono::Utc;
use commission::DataProvider;
use serde_json::{json, Value};

use crate::webserver_impl::WebServer;

/// Health check endpoint
pub async fn health_check<D>(State(server): State<WebServer<D>>) -> Json<Value>
where
    D: DataProvider + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": server.uptime_seconds(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
