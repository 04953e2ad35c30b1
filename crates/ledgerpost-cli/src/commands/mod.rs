//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (load_config, open_store)
//! - `check` - Seed validation
//! - `insights` - Insight listing, lookup, related and category counts
//! - `serve` - Web server command
//! - `services` - Services catalog

pub mod check;
pub mod core;
pub mod insights;
pub mod serve;
pub mod services;

// Re-export command functions for main.rs
pub use check::*;
pub use core::*;
pub use insights::*;
pub use serve::*;
pub use services::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
