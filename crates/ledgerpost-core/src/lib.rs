//! Ledgerpost Core Library
//!
//! Shared functionality for the Ledgerpost bookkeeping site:
//! - Content model for insights (articles) and services
//! - Listing queries with search, category filter, pagination and facets
//! - In-memory content store seeded at startup
//! - Site configuration with embedded defaults

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod seed;
pub mod slug;
pub mod store;

/// Test utilities including insight fixtures
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use models::{
    Author, Category, Facet, Insight, InsightDraft, InsightPage, InsightPatch, Pagination,
    Service, Tag,
};
pub use query::{InsightQuery, DEFAULT_PAGE_LIMIT, DEFAULT_RELATED_LIMIT};
pub use seed::{validate_insights, SeedIssue};
pub use store::ContentStore;
