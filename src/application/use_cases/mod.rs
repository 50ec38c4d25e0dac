mod generate_response;

pub use generate_response::*;
