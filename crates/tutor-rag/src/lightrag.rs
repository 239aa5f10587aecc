//! LightRAG server client.
//!
//! Endpoints used:
//! - `POST /documents/text` `{"text": ...}` to index a document
//! - `POST /query` `{"query": ..., "mode": ...}` → `{"response": ...}`

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tutor_core::config::RagConfig;
use tutor_core::error::{Result, TutorError};
use tutor_core::traits::RagBackend;

pub struct LightRagClient {
    base_url: String,
    mode: String,
    client: reqwest::Client,
}

impl LightRagClient {
    pub fn new(config: &RagConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TutorError::Http(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            mode: config.mode.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("LightRAG POST {url}");

        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| TutorError::Http(format!("LightRAG connection failed ({url}): {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::warn!("LightRAG {path} returned {status}");
            return Err(TutorError::Rag(format!("LightRAG API error {status}: {text}")));
        }

        resp.json().await.map_err(|e| TutorError::Http(e.to_string()))
    }
}

#[async_trait]
impl RagBackend for LightRagClient {
    fn name(&self) -> &str {
        "lightrag"
    }

    async fn insert(&self, text: &str) -> Result<()> {
        self.post("/documents/text", &json!({ "text": text })).await?;
        tracing::info!("📥 Inserted {} chars into LightRAG", text.len());
        Ok(())
    }

    async fn query(&self, question: &str) -> Result<String> {
        let json = self
            .post("/query", &json!({ "query": question, "mode": self.mode }))
            .await?;
        json["response"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| TutorError::Rag("LightRAG reply has no 'response' field".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<Value>>>;

    async fn spawn_mock(query_reply: Value, status: StatusCode) -> (String, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let reply = Arc::new(query_reply);

        let app = Router::new()
            .route(
                "/documents/text",
                post(|State(seen): State<Seen>, Json(body): Json<Value>| async move {
                    seen.lock().unwrap().push(body);
                    Json(json!({"status": "success"}))
                }),
            )
            .route(
                "/query",
                post(move |State(seen): State<Seen>, Json(body): Json<Value>| {
                    let reply = reply.clone();
                    async move {
                        seen.lock().unwrap().push(body);
                        (status, Json((*reply).clone()))
                    }
                }),
            )
            .with_state(seen.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), seen)
    }

    fn client_for(endpoint: &str) -> LightRagClient {
        LightRagClient::new(&RagConfig {
            endpoint: endpoint.to_string(),
            mode: "hybrid".into(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = client_for("http://127.0.0.1:9621/");
        assert_eq!(client.base_url(), "http://127.0.0.1:9621");
        assert_eq!(client.name(), "lightrag");
    }

    #[tokio::test]
    async fn test_insert_posts_text() {
        let (url, seen) = spawn_mock(json!({}), StatusCode::OK).await;
        let client = client_for(&url);

        client.insert("Course: Rust\nOwnership").await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0]["text"], "Course: Rust\nOwnership");
    }

    #[tokio::test]
    async fn test_query_returns_response_field() {
        let (url, seen) =
            spawn_mock(json!({"response": "Ownership moves values."}), StatusCode::OK).await;
        let client = client_for(&url);

        let answer = client.query("what is ownership?").await.unwrap();
        assert_eq!(answer, "Ownership moves values.");

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0]["query"], "what is ownership?");
        assert_eq!(seen[0]["mode"], "hybrid");
    }

    #[tokio::test]
    async fn test_query_missing_response_field() {
        let (url, _) = spawn_mock(json!({"other": 1}), StatusCode::OK).await;
        let err = client_for(&url).query("q").await.unwrap_err();
        assert!(matches!(err, TutorError::Rag(_)));
    }

    #[tokio::test]
    async fn test_query_error_status() {
        let (url, _) =
            spawn_mock(json!({"detail": "boom"}), StatusCode::INTERNAL_SERVER_ERROR).await;
        let err = client_for(&url).query("q").await.unwrap_err();
        match err {
            TutorError::Rag(msg) => assert!(msg.contains("500")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(&format!("http://{addr}")).insert("x").await.unwrap_err();
        assert!(matches!(err, TutorError::Http(_)));
    }
}
