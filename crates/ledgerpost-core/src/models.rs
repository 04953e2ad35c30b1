//! Domain models for Ledgerpost

use serde::{Deserialize, Deserializer, Serialize};

/// Category slug the site UI uses for its "featured" tab.
///
/// Passing it as a category filter means "no category filter".
pub const FEATURED_CATEGORY: &str = "featured";

/// Category slug given to insights created without a category
pub const UNCATEGORIZED: &str = "uncategorized";

/// Thumbnail used when a new insight does not provide one
pub const DEFAULT_THUMBNAIL: &str = "/slider-1.webp";

/// Read time shown when a new insight does not provide one
pub const DEFAULT_READ_TIME: &str = "5 min read";

/// A category an insight is filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn new(name: &str, slug: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slug.to_string(),
        }
    }

    pub fn uncategorized() -> Self {
        Self::new("Uncategorized", UNCATEGORIZED)
    }
}

/// A free-form tag on an insight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
}

/// Author byline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    /// Avatar image reference
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// An article in the insights section of the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub title: String,
    /// URL-safe identifier used for routing, unique across the collection
    pub slug: String,
    pub excerpt: String,
    /// Long-form HTML body
    #[serde(rename = "content", default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Display-formatted publish date ("January 15, 2024"). Not sortable.
    #[serde(rename = "date")]
    pub published_at: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_video: Option<String>,
    /// Category shown on cards
    #[serde(rename = "category")]
    pub primary_category: Category,
    /// All categories in display order
    pub categories: Vec<Category>,
    #[serde(default)]
    pub is_featured: bool,
    /// Display string such as "5 min read"
    pub read_time: String,
    /// Card gradient classes for the front end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Insight {
    /// Whether any of the insight's categories has exactly this slug
    pub fn has_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|c| c.slug == slug)
    }
}

/// Input for creating an insight. Every field is optional; missing fields
/// are filled with defaults by the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsightDraft {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
    pub thumbnail_url: Option<String>,
    pub banner_image: Option<String>,
    pub banner_video: Option<String>,
    pub category: Option<Category>,
    pub categories: Option<Vec<Category>>,
    pub is_featured: Option<bool>,
    pub read_time: Option<String>,
    pub gradient: Option<String>,
    pub link: Option<String>,
    pub author: Option<Author>,
    pub tags: Option<Vec<Tag>>,
}

/// Partial update for an insight (shallow merge).
///
/// Nullable fields use `Option<Option<T>>`: absent leaves the field alone,
/// `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsightPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub content: Option<Option<String>>,
    pub date: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub banner_image: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub banner_video: Option<Option<String>>,
    pub category: Option<Category>,
    pub categories: Option<Vec<Category>>,
    pub is_featured: Option<bool>,
    pub read_time: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub gradient: Option<Option<String>>,
    pub link: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub author: Option<Option<Author>>,
    pub tags: Option<Vec<Tag>>,
}

impl InsightPatch {
    /// Merge the patch into an existing insight. The id is never touched.
    pub fn apply(self, insight: &mut Insight) {
        if let Some(title) = self.title {
            insight.title = title;
        }
        if let Some(slug) = self.slug {
            insight.slug = slug;
        }
        if let Some(excerpt) = self.excerpt {
            insight.excerpt = excerpt;
        }
        if let Some(content) = self.content {
            insight.body = content;
        }
        if let Some(date) = self.date {
            insight.published_at = date;
        }
        if let Some(thumbnail_url) = self.thumbnail_url {
            insight.thumbnail_url = thumbnail_url;
        }
        if let Some(banner_image) = self.banner_image {
            insight.banner_image = banner_image;
        }
        if let Some(banner_video) = self.banner_video {
            insight.banner_video = banner_video;
        }
        if let Some(category) = self.category {
            insight.primary_category = category;
        }
        if let Some(categories) = self.categories {
            insight.categories = categories;
        }
        if let Some(is_featured) = self.is_featured {
            insight.is_featured = is_featured;
        }
        if let Some(read_time) = self.read_time {
            insight.read_time = read_time;
        }
        if let Some(gradient) = self.gradient {
            insight.gradient = gradient;
        }
        if let Some(link) = self.link {
            insight.link = link;
        }
        if let Some(author) = self.author {
            insight.author = author;
        }
        if let Some(tags) = self.tags {
            insight.tags = tags;
        }
    }
}

/// Distinguishes an explicit `null` (Some(None)) from a missing field (None)
fn double_option<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Number of insights carrying a category, over the whole collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

/// Pagination block of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// One page of an insight listing plus the global category facets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightPage {
    pub items: Vec<Insight>,
    pub categories: Vec<Facet>,
    pub pagination: Pagination,
}

/// An entry in the services catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    /// Key into the front end's icon table
    pub icon: String,
    pub slug: String,
    /// Display ordinal ("01", "02", ...)
    pub number: String,
    #[serde(default)]
    pub features: Vec<String>,
}
