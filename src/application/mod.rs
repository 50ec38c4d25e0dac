//! # Application Layer
//!
//! The request pipeline and the ports it depends on.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
