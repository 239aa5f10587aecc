//! Trait seams for pluggable collaborators.

pub mod rag;

pub use rag::RagBackend;
