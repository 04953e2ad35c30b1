//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ledgerpost - Content API for the bookkeeping site
#[derive(Parser)]
#[command(name = "ledgerpost")]
#[command(about = "Insights and services content for the bookkeeping site", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.config/ledgerpost/config.toml, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Directory with the built site front end
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// JSON file of insights to serve instead of the built-in seed
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Browse insights
    Insights {
        #[command(subcommand)]
        action: Option<InsightsAction>,
    },

    /// Show category counts over all insights
    Categories,

    /// Show the services catalog
    Services {
        /// Show a single service
        #[arg(long)]
        slug: Option<String>,
    },

    /// Validate the insight seed (ids, slugs, categories)
    Check {
        /// JSON file to check instead of the built-in seed
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum InsightsAction {
    /// List insights with optional search, category and paging
    List {
        /// Case-insensitive text to find in title, excerpt or body
        #[arg(short, long)]
        search: Option<String>,

        /// Category slug ("featured" shows everything)
        #[arg(short, long)]
        category: Option<String>,

        /// Page number (1-based)
        #[arg(long, default_value = "1")]
        page: usize,

        /// Insights per page
        #[arg(short, long, default_value = "12")]
        limit: usize,
    },

    /// Show one insight by slug
    Show {
        /// Insight slug
        slug: String,
    },

    /// Show insights related to one (same primary category)
    Related {
        /// Insight slug
        slug: String,

        /// Maximum number of results
        #[arg(short, long, default_value = "3")]
        limit: usize,
    },
}
