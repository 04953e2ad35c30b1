//! Shared utilities for commands
//!
//! This module contains:
//! - `load_config` - Resolve site config (file, user override, defaults) plus env
//! - `open_store` - Build the content store from the built-in or a file seed

use std::path::Path;

use anyhow::{Context, Result};
use ledgerpost_core::{ContentStore, SiteConfig};
use tracing::debug;

/// Load config and apply environment overrides
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let mut config = SiteConfig::load(path).context("Failed to load config")?;
    config.apply_env();
    debug!(
        host = %config.server.host,
        port = config.server.port,
        origins = config.server.allowed_origins.len(),
        "Config loaded"
    );
    Ok(config)
}

/// Open the content store from a seed file, or the built-in seed
pub fn open_store(seed: Option<&Path>) -> Result<ContentStore> {
    match seed {
        Some(path) => ContentStore::from_seed_file(path)
            .with_context(|| format!("Failed to load seed {}", path.display())),
        None => ContentStore::seeded().context("Failed to load built-in seed"),
    }
}
