//! Error type shared by all tutor crates.

use thiserror::Error;

/// Errors raised by tutor components.
#[derive(Debug, Error)]
pub enum TutorError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The RAG service answered, but not with what we asked for.
    #[error("RAG error: {0}")]
    Rag(String),

    /// Transport-level failure talking to an external service.
    #[error("HTTP error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, TutorError>;
