pub mod generate_controller;
pub mod health_controller;

pub use generate_controller::{GenerateController, MAX_BODY_BYTES};
pub use health_controller::{HealthController, HealthStatus, SERVICE_NAME};
