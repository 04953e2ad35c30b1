//! Site configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the user override (~/.config/ledgerpost/config.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Missing keys in an override keep their default values. Command-line flags
//! are applied on top by the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/ledgerpost.toml");

/// Environment variable with extra CORS origins (comma-separated)
pub const ALLOWED_ORIGINS_ENV: &str = "LEDGERPOST_ALLOWED_ORIGINS";

/// Upper bound on `max_page_limit`, whatever the config says
const PAGE_LIMIT_CEILING: usize = 1000;

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Extra CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// Directory with the built site front end
    pub static_dir: Option<PathBuf>,
}

/// Content settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSettings {
    /// JSON file replacing the embedded insights
    pub seed_file: Option<PathBuf>,
    /// Largest page size a listing request may ask for
    pub max_page_limit: usize,
}

/// Full site configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub server: ServerSettings,
    pub content: ContentSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
                allowed_origins: vec![],
                static_dir: None,
            },
            content: ContentSettings {
                seed_file: None,
                max_page_limit: 100,
            },
        }
    }
}

impl SiteConfig {
    /// Load from an explicit path, the user override, or the embedded default
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading config");
                fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?
            }
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => {
                    debug!(path = %path.display(), "Loading user config override");
                    fs::read_to_string(&path).map_err(|e| {
                        Error::Config(format!("Failed to read {}: {}", path.display(), e))
                    })?
                }
                None => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }

    /// Add origins from a comma-separated list, skipping blanks and repeats
    pub fn add_allowed_origins(&mut self, list: &str) {
        for origin in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !self.server.allowed_origins.iter().any(|o| o == origin) {
                self.server.allowed_origins.push(origin.to_string());
            }
        }
    }

    /// Apply environment overrides (`LEDGERPOST_ALLOWED_ORIGINS`)
    pub fn apply_env(&mut self) {
        if let Ok(origins) = std::env::var(ALLOWED_ORIGINS_ENV) {
            self.add_allowed_origins(&origins);
        }
    }
}

/// User config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ledgerpost").join("config.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    server: Option<RawServer>,
    content: Option<RawContent>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
    allowed_origins: Option<Vec<String>>,
    static_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawContent {
    seed_file: Option<PathBuf>,
    max_page_limit: Option<usize>,
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = SiteConfig::default();

    if let Some(server) = raw.server {
        if let Some(host) = server.host {
            config.server.host = host;
        }
        if let Some(port) = server.port {
            config.server.port = port;
        }
        if let Some(origins) = server.allowed_origins {
            config.server.allowed_origins = origins;
        }
        config.server.static_dir = server.static_dir;
    }

    if let Some(content) = raw.content {
        config.content.seed_file = content.seed_file;
        if let Some(limit) = content.max_page_limit {
            if limit == 0 {
                return Err(Error::Config(
                    "content.max_page_limit must be at least 1".to_string(),
                ));
            }
            config.content.max_page_limit = limit.min(PAGE_LIMIT_CEILING);
        }
    }

    Ok(config)
}
