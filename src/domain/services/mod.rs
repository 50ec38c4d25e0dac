//! Pure request/response transformations.

mod fences;
mod normalizer;
mod synthesizer;

pub use fences::*;
pub use normalizer::*;
pub use synthesizer::*;
