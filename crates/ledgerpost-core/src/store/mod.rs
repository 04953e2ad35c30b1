//! In-memory content store
//!
//! This module is organized by domain:
//! - `insights` - Insight queries and create/update/delete
//! - `services` - Read-only services catalog
//!
//! The store is seeded at startup and lives for the process. Changes are not
//! persisted: a restart goes back to the seed. All insight mutations go
//! through one write lock, so concurrent creates cannot race on slugs or ids.

use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{Insight, Service};
use crate::seed::{self, validate_insights};

mod insights;
mod services;

/// Insights plus the id bookkeeping needed to hand out fresh ids
pub(crate) struct InsightCollection {
    pub(crate) items: Vec<Insight>,
    /// Highest numeric id handed out or seen in the seed
    pub(crate) last_id: u64,
}

impl InsightCollection {
    fn new(items: Vec<Insight>) -> Self {
        let last_id = items
            .iter()
            .filter_map(|i| i.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { items, last_id }
    }
}

/// Content store shared by every request handler
#[derive(Clone)]
pub struct ContentStore {
    insights: Arc<RwLock<InsightCollection>>,
    services: Arc<Vec<Service>>,
}

impl ContentStore {
    /// Create a store from the embedded seed data
    pub fn seeded() -> Result<Self> {
        Self::from_parts(seed::embedded_insights()?, seed::embedded_services()?)
    }

    /// Create a store whose insights come from a JSON file. The services
    /// catalog is always the embedded one.
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "Loading insights from seed file");
        Self::from_parts(seed::load_insights(path)?, seed::embedded_services()?)
    }

    /// Create a store from explicit insights and services.
    ///
    /// Fails if the insights share an id or slug; other seed issues are
    /// logged and tolerated.
    pub fn from_parts(insights: Vec<Insight>, services: Vec<Service>) -> Result<Self> {
        let issues = validate_insights(&insights);
        let fatal: Vec<String> = issues
            .iter()
            .filter(|i| i.is_fatal())
            .map(|i| i.to_string())
            .collect();
        if !fatal.is_empty() {
            return Err(Error::Seed(fatal.join("; ")));
        }
        for issue in &issues {
            warn!(%issue, "Seed content issue");
        }

        info!(
            insights = insights.len(),
            services = services.len(),
            "Content store seeded"
        );

        Ok(Self {
            insights: Arc::new(RwLock::new(InsightCollection::new(insights))),
            services: Arc::new(services),
        })
    }

    /// Shared access to the insight collection
    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, InsightCollection>> {
        self.insights.read().map_err(|_| Error::LockPoisoned)
    }

    /// Exclusive access to the insight collection
    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, InsightCollection>> {
        self.insights.write().map_err(|_| Error::LockPoisoned)
    }
}

#[cfg(test)]
mod tests;
