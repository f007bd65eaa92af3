//! Common utility functions

pub mod asset;
pub mod validation;

// Re-export commonly used utilities
pub use asset::*;
pub use validation::*;
