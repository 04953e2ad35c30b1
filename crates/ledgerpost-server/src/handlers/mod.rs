//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod insights;
pub mod services;

// Re-export all handlers for use in router
pub use insights::*;
pub use services::*;
