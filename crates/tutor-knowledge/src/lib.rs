//! # Tutor Knowledge
//!
//! A deliberately tiny knowledge base for the course tutor. No vector DB,
//! no embeddings, no persistence: topics live in an insertion-ordered map
//! and questions are answered by plain substring matching.
//!
//! ## How it works
//! ```text
//! POST /insert "Course: Intro To Testing\n..."
//!   ↓ extract_course_name
//! KnowledgeStore["intro to testing"] = content
//!
//! POST /query "how do loops work?"
//!   ↓ resolve (first topic name contained in the question)
//! KnowledgeStore["loops"]
//!
//! GET /knowledge-graph
//!   ↓ build_graph (topic j named inside topic i's content => i → j)
//! nodes + edges + stats
//! ```

pub mod graph;
pub mod resolver;
pub mod seed;
pub mod store;

pub use graph::{GraphEdge, GraphNode, GraphStats, KnowledgeGraph, NodeKind, build_graph};
pub use resolver::{Answer, FALLBACK_CONTENT, answer, resolve};
pub use store::{KnowledgeStore, extract_course_name};
