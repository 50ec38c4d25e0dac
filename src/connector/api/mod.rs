pub mod config;
pub mod container;
pub mod controller;
pub mod cors;
pub mod error_response;
pub mod router;

pub use config::{ConfigError, ProxyConfig};
pub use container::Container;
pub use cors::CorsPolicy;
pub use error_response::{ApiError, ErrorResponse};
pub use router::{router, GENERATE_PATH, HEALTH_PATH};
