//! Test fixtures for insights and stores
//!
//! Enabled for this crate's own tests and, through the `test-utils` feature,
//! for the server and CLI test suites.

use crate::models::{Category, Insight, Service, DEFAULT_READ_TIME, DEFAULT_THUMBNAIL};
use crate::slug::slugify;
use crate::store::ContentStore;

/// Builder for an insight with sensible fixture defaults
pub struct InsightBuilder {
    insight: Insight,
}

impl InsightBuilder {
    /// Start an insight with the given id and title. The slug is derived from
    /// the title and the insight is filed under "Uncategorized".
    pub fn new(id: &str, title: &str) -> Self {
        let slug = slugify(title);
        Self {
            insight: Insight {
                id: id.to_string(),
                title: title.to_string(),
                link: format!("/insights/{}", slug),
                slug,
                excerpt: "Summary.".to_string(),
                body: None,
                published_at: "January 1, 2024".to_string(),
                thumbnail_url: DEFAULT_THUMBNAIL.to_string(),
                banner_image: None,
                banner_video: None,
                primary_category: Category::uncategorized(),
                categories: vec![Category::uncategorized()],
                is_featured: false,
                read_time: DEFAULT_READ_TIME.to_string(),
                gradient: None,
                author: None,
                tags: vec![],
            },
        }
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.insight.slug = slug.to_string();
        self.insight.link = format!("/insights/{}", slug);
        self
    }

    pub fn excerpt(mut self, excerpt: &str) -> Self {
        self.insight.excerpt = excerpt.to_string();
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.insight.body = Some(body.to_string());
        self
    }

    /// Set categories from `(name, slug)` pairs; the first becomes primary
    pub fn categories(mut self, categories: &[(&str, &str)]) -> Self {
        self.insight.categories = categories
            .iter()
            .map(|(name, slug)| Category::new(name, slug))
            .collect();
        if let Some(first) = self.insight.categories.first() {
            self.insight.primary_category = first.clone();
        }
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.insight.is_featured = featured;
        self
    }

    pub fn build(self) -> Insight {
        self.insight
    }
}

/// `count` insights with ids "1".."count", the first `tagged` of which are
/// filed under "tax-updates" and the rest under "business-tips"
pub fn numbered_insights(count: usize, tagged: usize) -> Vec<Insight> {
    (1..=count)
        .map(|n| {
            let category = if n <= tagged {
                ("Tax Updates", "tax-updates")
            } else {
                ("Business Tips", "business-tips")
            };
            InsightBuilder::new(&n.to_string(), &format!("Insight number {}", n))
                .categories(&[category])
                .build()
        })
        .collect()
}

/// A small services catalog
pub fn sample_services() -> Vec<Service> {
    vec![
        Service {
            title: "Assurance".to_string(),
            description: "Audits and reviews.".to_string(),
            icon: "shield".to_string(),
            slug: "assurance".to_string(),
            number: "01".to_string(),
            features: vec!["Financial Statement Audits".to_string()],
        },
        Service {
            title: "Tax".to_string(),
            description: "Tax planning and returns.".to_string(),
            icon: "file-text".to_string(),
            slug: "tax".to_string(),
            number: "02".to_string(),
            features: vec![],
        },
    ]
}

/// A store holding exactly these insights and the sample services
pub fn store_with(insights: Vec<Insight>) -> ContentStore {
    ContentStore::from_parts(insights, sample_services())
        .expect("fixture insights should have unique ids and slugs")
}
