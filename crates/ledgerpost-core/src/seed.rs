//! Seed content for the store
//!
//! The site ships with a fixed set of insights and services compiled into
//! the binary. A JSON file can replace the insights at startup; it is
//! validated before the store accepts it.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{Insight, Service};
use crate::slug::is_url_safe;

/// Embedded insights (compiled into binary)
const EMBEDDED_INSIGHTS: &str = include_str!("../../../data/insights.json");

/// Embedded services catalog (compiled into binary)
const EMBEDDED_SERVICES: &str = include_str!("../../../data/services.json");

/// The insights the site ships with
pub fn embedded_insights() -> Result<Vec<Insight>> {
    parse_insights(EMBEDDED_INSIGHTS)
}

/// The services catalog the site ships with
pub fn embedded_services() -> Result<Vec<Service>> {
    serde_json::from_str(EMBEDDED_SERVICES)
        .map_err(|e| Error::Seed(format!("Invalid embedded services: {}", e)))
}

/// Parse a JSON array of insights
pub fn parse_insights(content: &str) -> Result<Vec<Insight>> {
    serde_json::from_str(content).map_err(|e| Error::Seed(format!("Invalid insights JSON: {}", e)))
}

/// Read insights from a JSON file
pub fn load_insights(path: &Path) -> Result<Vec<Insight>> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Seed(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;
    parse_insights(&content)
}

/// A problem found in a set of insights
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedIssue {
    /// Two or more insights share this id
    DuplicateId(String),
    /// Two or more insights share this slug
    DuplicateSlug(String),
    /// Slug is not lowercase words joined by hyphens
    UnsafeSlug { id: String, slug: String },
    /// Insight has no categories, so no category view will show it
    NoCategories(String),
}

impl SeedIssue {
    /// Issues that break lookups and must stop the store from loading
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::DuplicateId(_) | Self::DuplicateSlug(_))
    }
}

impl fmt::Display for SeedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate id '{}'", id),
            Self::DuplicateSlug(slug) => write!(f, "duplicate slug '{}'", slug),
            Self::UnsafeSlug { id, slug } => {
                write!(f, "insight {} has a slug that is not URL-safe: '{}'", id, slug)
            }
            Self::NoCategories(id) => write!(f, "insight {} has no categories", id),
        }
    }
}

/// Check the collection invariants. Each duplicate is reported once.
pub fn validate_insights(insights: &[Insight]) -> Vec<SeedIssue> {
    let mut issues = Vec::new();
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();
    let mut reported_ids = HashSet::new();
    let mut reported_slugs = HashSet::new();

    for insight in insights {
        if !ids.insert(insight.id.as_str()) && reported_ids.insert(insight.id.as_str()) {
            issues.push(SeedIssue::DuplicateId(insight.id.clone()));
        }
        if !slugs.insert(insight.slug.as_str()) && reported_slugs.insert(insight.slug.as_str()) {
            issues.push(SeedIssue::DuplicateSlug(insight.slug.clone()));
        }
        if !is_url_safe(&insight.slug) {
            issues.push(SeedIssue::UnsafeSlug {
                id: insight.id.clone(),
                slug: insight.slug.clone(),
            });
        }
        if insight.categories.is_empty() {
            issues.push(SeedIssue::NoCategories(insight.id.clone()));
        }
    }

    issues
}
