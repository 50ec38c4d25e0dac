//! # Connector Layer
//!
//! External integrations:
//! - Model clients (Gemini over HTTP, scripted in-process)
//! - HTTP API (axum router, controllers, CORS, configuration)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
