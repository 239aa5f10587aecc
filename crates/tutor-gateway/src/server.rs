//! HTTP server implementation using Axum.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tutor_core::config::GatewayConfig;
use tutor_knowledge::KnowledgeStore;

/// Shared state for the gateway server.
pub struct AppState {
    pub start_time: std::time::Instant,
    /// The one knowledge store every request reads and writes.
    pub knowledge: Mutex<KnowledgeStore>,
}

impl AppState {
    pub fn new(store: KnowledgeStore) -> Self {
        Self {
            start_time: std::time::Instant::now(),
            knowledge: Mutex::new(store),
        }
    }

    /// Lock the store for a single operation.
    ///
    /// A panic in another handler must not take the store down with it, so
    /// a poisoned lock is recovered.
    pub fn store(&self) -> MutexGuard<'_, KnowledgeStore> {
        self.knowledge.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    build_router_from_arc(Arc::new(state))
}

pub fn build_router_from_arc(shared: Arc<AppState>) -> Router {
    Router::new()
        .route("/query", post(super::routes::query))
        .route("/insert", post(super::routes::insert))
        .route("/courses", get(super::routes::list_courses))
        .route("/knowledge-graph", get(super::routes::knowledge_graph))
        .route("/health", get(super::routes::health_check))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Start the HTTP server and serve until the process exits.
pub async fn start(config: &GatewayConfig, store: KnowledgeStore) -> anyhow::Result<()> {
    tracing::info!("📚 Knowledge store ready: {} topics", store.len());

    let app = build_router(AppState::new(store));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🌐 Tutor gateway listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
