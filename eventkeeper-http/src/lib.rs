//! eventkeeper HTTP surface.
//!
//! Modules:
//! - `app`: shared state and server startup
//! - `http`: Axum router and handlers
//! - `error`: JSON error responses

pub mod app;
pub mod error;
pub mod http;

pub use app::{run, serve, AppState};
pub use http::build_router;
