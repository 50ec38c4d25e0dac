mod gemini_client;
mod scripted_model_client;

pub use gemini_client::*;
pub use scripted_model_client::*;
