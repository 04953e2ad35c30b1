//! Services catalog operations

use super::ContentStore;
use crate::models::Service;

impl ContentStore {
    /// All services in catalog order
    pub fn list_services(&self) -> Vec<Service> {
        self.services.to_vec()
    }

    /// Find a service by exact slug
    pub fn get_service(&self, slug: &str) -> Option<Service> {
        self.services.iter().find(|s| s.slug == slug).cloned()
    }
}
