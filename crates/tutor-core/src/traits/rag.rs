//! Retrieval-augmented generation backend.
//!
//! The tutor never indexes documents itself. Anything that can take text in
//! and answer a question about it can sit behind this trait.

use async_trait::async_trait;

use crate::error::Result;

#[async_trait]
pub trait RagBackend: Send + Sync {
    /// Backend name, used in logs.
    fn name(&self) -> &str;

    /// Hand a document to the backend for indexing.
    async fn insert(&self, text: &str) -> Result<()>;

    /// Ask the backend a question and return its answer.
    async fn query(&self, question: &str) -> Result<String>;
}
