//! API route handlers for the gateway.
//!
//! Request fields are read permissively: anything missing or of the wrong
//! type falls back to an empty value instead of failing the request.

use axum::{Json, extract::State};
use std::sync::Arc;
use tutor_knowledge::{Answer, KnowledgeGraph};

use super::server::AppState;

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "tutor-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

/// Answer a question from the knowledge store.
pub async fn query(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Json<Answer> {
    let question = body["question"].as_str().unwrap_or("");
    let store = state.store();
    Json(tutor_knowledge::answer(&store, question, &body["originalData"]))
}

/// Insert course content; the course name comes from its `Course:` line.
pub async fn insert(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    let content = body["content"].as_str().unwrap_or("");
    let course = state.store().insert(content);
    if course.is_none() {
        tracing::info!("📄 Insert without a 'Course:' line, nothing stored");
    }
    Json(serde_json::json!({"status": "inserted", "course": course}))
}

/// List topic names in store order.
pub async fn list_courses(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let courses = state.store().list_topics();
    Json(serde_json::json!({"courses": courses}))
}

/// Topic reference graph over the current store.
pub async fn knowledge_graph(State(state): State<Arc<AppState>>) -> Json<KnowledgeGraph> {
    Json(tutor_knowledge::build_graph(&state.store()))
}
