//! # Tutor Core
//!
//! Shared building blocks for the tutor workspace: the TOML configuration
//! system, the crate-wide error type, and the trait seam for external
//! retrieval backends.

pub mod config;
pub mod error;
pub mod traits;

pub use config::TutorConfig;
pub use error::{Result, TutorError};
pub use traits::RagBackend;
