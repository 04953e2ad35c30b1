//! Insight operations

use chrono::{Local, Utc};
use tracing::{debug, info};

use super::{ContentStore, InsightCollection};
use crate::error::{Error, Result};
use crate::models::{
    Category, Facet, Insight, InsightDraft, InsightPage, InsightPatch, DEFAULT_READ_TIME,
    DEFAULT_THUMBNAIL,
};
use crate::query::{self, InsightQuery};
use crate::slug::{is_url_safe, slugify};

const DEFAULT_TITLE: &str = "Untitled";
const DEFAULT_SLUG: &str = "untitled";

impl InsightCollection {
    /// Next unused id: milliseconds since the epoch, bumped past anything
    /// handed out before or already present. Fails once the numeric id
    /// space is used up.
    fn next_id(&mut self) -> Result<String> {
        let exhausted = || Error::Conflict("No insight ids left to assign".to_string());

        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let mut candidate = now.max(self.last_id.checked_add(1).ok_or_else(exhausted)?);
        while self.items.iter().any(|i| i.id == candidate.to_string()) {
            candidate = candidate.checked_add(1).ok_or_else(exhausted)?;
        }
        self.last_id = candidate;
        Ok(candidate.to_string())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// Fails if another insight (not `except_id`) already uses the slug
    fn ensure_slug_free(&self, slug: &str, except_id: Option<&str>) -> Result<()> {
        let taken = self
            .items
            .iter()
            .any(|i| i.slug == slug && Some(i.id.as_str()) != except_id);
        if taken {
            return Err(Error::Conflict(format!("Slug '{}' is already in use", slug)));
        }
        Ok(())
    }
}

fn ensure_url_safe(slug: &str) -> Result<()> {
    if !is_url_safe(slug) {
        return Err(Error::InvalidData(format!(
            "Slug '{}' must be lowercase letters, digits and single hyphens",
            slug
        )));
    }
    Ok(())
}

/// Today's date as the site displays it ("January 5, 2024")
fn display_date_today() -> String {
    Local::now().format("%B %-d, %Y").to_string()
}

impl ContentStore {
    /// List insights matching the query, with global category facets
    pub fn list_insights(&self, query: &InsightQuery<'_>) -> Result<InsightPage> {
        let collection = self.read()?;
        let page = query.run(&collection.items);
        debug!(
            search = ?query.search,
            category = ?query.category,
            page = page.pagination.page,
            limit = page.pagination.limit,
            total = page.pagination.total,
            "Listed insights"
        );
        Ok(page)
    }

    /// Category facets over the whole collection
    pub fn category_facets(&self) -> Result<Vec<Facet>> {
        let collection = self.read()?;
        Ok(query::category_facets(&collection.items))
    }

    /// Number of insights currently in the store
    pub fn insight_count(&self) -> Result<usize> {
        Ok(self.read()?.items.len())
    }

    /// Find an insight by exact slug
    pub fn get_insight_by_slug(&self, slug: &str) -> Result<Option<Insight>> {
        let collection = self.read()?;
        Ok(collection.items.iter().find(|i| i.slug == slug).cloned())
    }

    /// Find an insight by id
    pub fn get_insight(&self, id: &str) -> Result<Option<Insight>> {
        let collection = self.read()?;
        Ok(collection.items.iter().find(|i| i.id == id).cloned())
    }

    /// Up to `limit` other insights in the given category, in collection order
    pub fn related_insights(
        &self,
        current_id: &str,
        category_slug: &str,
        limit: usize,
    ) -> Result<Vec<Insight>> {
        let collection = self.read()?;
        Ok(query::related_insights(
            &collection.items,
            current_id,
            category_slug,
            limit,
        ))
    }

    /// Create an insight from a draft, filling defaults, and append it
    pub fn create_insight(&self, draft: InsightDraft) -> Result<Insight> {
        let title = draft
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let slug = match draft.slug.filter(|s| !s.is_empty()) {
            Some(slug) => {
                ensure_url_safe(&slug)?;
                slug
            }
            None => {
                let derived = slugify(&title);
                if derived.is_empty() {
                    DEFAULT_SLUG.to_string()
                } else {
                    derived
                }
            }
        };

        let primary_category = draft.category.unwrap_or_else(Category::uncategorized);
        let categories = draft
            .categories
            .unwrap_or_else(|| vec![primary_category.clone()]);

        let mut collection = self.write()?;
        collection.ensure_slug_free(&slug, None)?;

        let insight = Insight {
            id: collection.next_id()?,
            title,
            link: draft
                .link
                .unwrap_or_else(|| format!("/insights/{}", slug)),
            slug,
            excerpt: draft.excerpt.unwrap_or_default(),
            body: Some(draft.content.unwrap_or_default()),
            published_at: draft.date.unwrap_or_else(display_date_today),
            thumbnail_url: draft
                .thumbnail_url
                .unwrap_or_else(|| DEFAULT_THUMBNAIL.to_string()),
            banner_image: draft.banner_image,
            banner_video: draft.banner_video,
            primary_category,
            categories,
            is_featured: draft.is_featured.unwrap_or(false),
            read_time: draft
                .read_time
                .unwrap_or_else(|| DEFAULT_READ_TIME.to_string()),
            gradient: draft.gradient,
            author: draft.author,
            tags: draft.tags.unwrap_or_default(),
        };

        collection.items.push(insight.clone());
        info!(id = %insight.id, slug = %insight.slug, "Created insight");

        Ok(insight)
    }

    /// Shallow-merge a patch into the insight with this id
    pub fn update_insight(&self, id: &str, patch: InsightPatch) -> Result<Insight> {
        let mut collection = self.write()?;
        let index = collection
            .position(id)
            .ok_or_else(|| Error::NotFound(format!("Insight {}", id)))?;

        if let Some(slug) = patch.slug.as_deref() {
            if slug != collection.items[index].slug {
                ensure_url_safe(slug)?;
                collection.ensure_slug_free(slug, Some(id))?;
            }
        }

        let insight = &mut collection.items[index];
        patch.apply(insight);
        info!(id = %insight.id, slug = %insight.slug, "Updated insight");

        Ok(insight.clone())
    }

    /// Remove the insight with this id, keeping the order of the rest
    pub fn delete_insight(&self, id: &str) -> Result<Insight> {
        let mut collection = self.write()?;
        let index = collection
            .position(id)
            .ok_or_else(|| Error::NotFound(format!("Insight {}", id)))?;

        let removed = collection.items.remove(index);
        info!(id = %removed.id, slug = %removed.slug, "Deleted insight");

        Ok(removed)
    }
}
