//! # Friends Core
//!
//! Core domain layer for profile emoji. This crate contains the account and
//! emoji entities, the `:@user@domain:` shortcode scanner, the resolver and
//! repository interfaces it depends on, and the announcements presentation model.

pub mod domain;
pub mod errors;
pub mod presentation;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use presentation::*;
pub use repositories::*;
pub use services::*;
