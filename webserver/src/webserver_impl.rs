//! Main webserver implementation
//!
//! `WebServer` owns a `CommissionEngine` over any `DataProvider` and exposes
//! it through an axum router. The provider is injected, so tests run the same
//! router over the in-memory fixture or a mock.

use axum::{routing::get, Router};
use commission::{CommissionEngine, DataProvider};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::error::{WebServerError, WebServerResult};
use crate::web::handlers;

/// HTTP front end for the commission engine
pub struct WebServer<D: DataProvider> {
    engine: CommissionEngine<D>,
    started_at: Arc<Instant>,
}

impl<D: DataProvider> Clone for WebServer<D> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            started_at: Arc::clone(&self.started_at),
        }
    }
}

impl<D: DataProvider + 'static> WebServer<D> {
    pub fn new(provider: D) -> Self {
        Self::with_engine(CommissionEngine::new(provider))
    }

    pub fn with_engine(engine: CommissionEngine<D>) -> Self {
        Self {
            engine,
            started_at: Arc::new(Instant::now()),
        }
    }

    pub fn engine(&self) -> &CommissionEngine<D> {
        &self.engine
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/commission/calculate", get(handlers::calculate_commission::<D>))
            .route("/commission/level-commission", get(handlers::level_commission::<D>))
            .route("/commission/network/:userId", get(handlers::network_commissions::<D>))
            .route(
                "/commission/network-earnings/:userId",
                get(handlers::network_earnings::<D>),
            )
            .route("/commission/test-mlm", get(handlers::test_mlm::<D>))
            .route("/health", get(handlers::health_check::<D>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve on `addr` until `shutdown` resolves
    pub async fn run<F>(&self, addr: SocketAddr, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;

        info!("🌐 Commission API listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
