//! # Tutor RAG
//!
//! Bridge to an external LightRAG server. The server owns chunking,
//! embeddings and the LLM; this crate only forwards text in and questions
//! out through the [`RagBackend`](tutor_core::RagBackend) trait.

pub mod lightrag;

pub use lightrag::LightRagClient;
