//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use ledgerpost_core::SiteConfig;
use ledgerpost_server::ServerConfig;

use super::open_store;

pub async fn cmd_serve(
    config: SiteConfig,
    host: Option<&str>,
    port: Option<u16>,
    static_dir: Option<&Path>,
    seed: Option<&Path>,
) -> Result<()> {
    let host = host.unwrap_or(&config.server.host);
    let port = port.unwrap_or(config.server.port);
    let static_dir = static_dir.or(config.server.static_dir.as_deref());
    let seed = seed.or(config.content.seed_file.as_deref());

    println!("🚀 Starting Ledgerpost web server...");
    println!("   Listening: http://{}:{}", host, port);
    match seed {
        Some(path) => println!("   Seed: {}", path.display()),
        None => println!("   Seed: built-in"),
    }
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    if config.server.allowed_origins.is_empty() {
        println!("   🔒 CORS: same-origin only");
    } else {
        println!(
            "   🌐 CORS origins: {}",
            config.server.allowed_origins.join(", ")
        );
    }
    println!("   ⚠️  Content is in memory; changes are lost on restart");
    println!();

    let store = open_store(seed)?;

    let server_config = ServerConfig {
        allowed_origins: config.server.allowed_origins.clone(),
        max_page_limit: config.content.max_page_limit,
    };

    let static_dir = static_dir
        .map(|d| {
            d.to_str()
                .with_context(|| format!("Static dir is not valid UTF-8: {}", d.display()))
        })
        .transpose()?;

    ledgerpost_server::serve_with_config(store, host, port, static_dir, server_config)
        .await
        .context("Server failed")
}
