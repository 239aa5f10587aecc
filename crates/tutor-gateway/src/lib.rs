//! # Tutor Gateway
//!
//! JSON-over-HTTP surface for the knowledge store:
//!
//! | Method | Path               | Handler                     |
//! |--------|--------------------|-----------------------------|
//! | POST   | `/query`           | [`routes::query`]           |
//! | POST   | `/insert`          | [`routes::insert`]          |
//! | GET    | `/courses`         | [`routes::list_courses`]    |
//! | GET    | `/knowledge-graph` | [`routes::knowledge_graph`] |
//! | GET    | `/health`          | [`routes::health_check`]    |

pub mod routes;
pub mod server;

pub use server::{AppState, build_router, start};
