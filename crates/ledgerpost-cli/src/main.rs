//! Ledgerpost CLI - Content API for the bookkeeping site
//!
//! Usage:
//!   ledgerpost serve --port 3000          Start web server
//!   ledgerpost insights list --search cra  Browse insights
//!   ledgerpost services                   Show the services catalog
//!   ledgerpost check --seed insights.json Validate a seed file

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
            seed,
        } => {
            commands::cmd_serve(
                config,
                host.as_deref(),
                port,
                static_dir.as_deref(),
                seed.as_deref(),
            )
            .await
        }
        Commands::Insights { action } => {
            let store = commands::open_store(config.content.seed_file.as_deref())?;
            match action {
                None => commands::cmd_insights_list(&store, None, None, 1, 12, cli.json),
                Some(InsightsAction::List {
                    search,
                    category,
                    page,
                    limit,
                }) => commands::cmd_insights_list(
                    &store,
                    search.as_deref(),
                    category.as_deref(),
                    page,
                    limit,
                    cli.json,
                ),
                Some(InsightsAction::Show { slug }) => {
                    commands::cmd_insights_show(&store, &slug, cli.json)
                }
                Some(InsightsAction::Related { slug, limit }) => {
                    commands::cmd_insights_related(&store, &slug, limit, cli.json)
                }
            }
        }
        Commands::Categories => {
            let store = commands::open_store(config.content.seed_file.as_deref())?;
            commands::cmd_categories(&store, cli.json)
        }
        Commands::Services { slug } => {
            let store = commands::open_store(config.content.seed_file.as_deref())?;
            commands::cmd_services(&store, slug.as_deref(), cli.json)
        }
        Commands::Check { seed } => {
            let seed = seed.or(config.content.seed_file);
            commands::cmd_check(seed.as_deref(), cli.json)
        }
    }
}
