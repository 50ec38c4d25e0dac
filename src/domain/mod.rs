//! # Domain Layer
//!
//! Request envelope, endpoint payloads, prompt synthesis and reply
//! normalization. Nothing here touches HTTP or the network.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
