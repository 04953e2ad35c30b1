//! Insight listing queries
//!
//! Filtering, pagination and category facets over an in-memory slice of
//! insights. The store runs these under its read lock; they are plain
//! functions so they can be tested without one.

use std::collections::HashMap;

use crate::models::{Facet, Insight, InsightPage, Pagination, FEATURED_CATEGORY, UNCATEGORIZED};

/// Page used when none is requested
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when none is requested
pub const DEFAULT_PAGE_LIMIT: usize = 12;

/// Number of related insights shown under an article
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Builder for an insight listing query
///
/// The lifetime `'query` covers the borrowed search and category strings.
#[derive(Debug, Clone, Default)]
pub struct InsightQuery<'query> {
    pub search: Option<&'query str>,
    pub category: Option<&'query str>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl<'query> InsightQuery<'query> {
    /// Create a new, unfiltered query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search (case-insensitive substring)
    pub fn search(mut self, search: Option<&'query str>) -> Self {
        self.search = search;
        self
    }

    /// Set the category slug filter
    pub fn category(mut self, category: Option<&'query str>) -> Self {
        self.category = category;
        self
    }

    /// Set the 1-based page number
    pub fn page(mut self, page: Option<usize>) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Effective page number, never below 1
    pub fn page_number(&self) -> usize {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    /// Effective page size, never below 1
    pub fn page_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1)
    }

    /// Lowercased search needle, if the search should be applied at all
    fn needle(&self) -> Option<String> {
        self.search
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.to_lowercase())
    }

    /// Category slug to filter on. Empty and "featured" mean no filter.
    fn category_filter(&self) -> Option<&'query str> {
        self.category
            .filter(|c| !c.is_empty() && *c != FEATURED_CATEGORY)
    }

    /// Run the query: search, then category, then paginate. Facets are
    /// always computed over the whole `insights` slice.
    pub fn run(&self, insights: &[Insight]) -> InsightPage {
        let needle = self.needle();
        let category = self.category_filter();

        let filtered: Vec<&Insight> = insights
            .iter()
            .filter(|insight| match &needle {
                Some(needle) => matches_search(insight, needle),
                None => true,
            })
            .filter(|insight| match category {
                Some(slug) => insight.has_category(slug),
                None => true,
            })
            .collect();

        let page = self.page_number();
        let limit = self.page_limit();
        let total = filtered.len();
        let start = (page - 1).saturating_mul(limit);

        let items = filtered
            .into_iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();

        InsightPage {
            items,
            categories: category_facets(insights),
            pagination: Pagination {
                page,
                limit,
                total,
                total_pages: total.div_ceil(limit),
            },
        }
    }
}

/// Case-insensitive substring match on title, excerpt and body.
/// `needle` must already be lowercased.
fn matches_search(insight: &Insight, needle: &str) -> bool {
    insight.title.to_lowercase().contains(needle)
        || insight.excerpt.to_lowercase().contains(needle)
        || insight
            .body
            .as_deref()
            .is_some_and(|body| body.to_lowercase().contains(needle))
}

/// Count insights per category slug across the whole collection.
///
/// "featured" and "uncategorized" are left out. Facets come back in order of
/// first appearance and keep the name seen first for each slug. An insight
/// listing the same slug twice is counted once.
pub fn category_facets(insights: &[Insight]) -> Vec<Facet> {
    let mut facets: Vec<Facet> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for insight in insights {
        let mut seen: Vec<&str> = Vec::with_capacity(insight.categories.len());
        for category in &insight.categories {
            let slug = category.slug.as_str();
            if slug == FEATURED_CATEGORY || slug == UNCATEGORIZED || seen.contains(&slug) {
                continue;
            }
            seen.push(slug);

            match index.get(slug) {
                Some(&i) => facets[i].count += 1,
                None => {
                    index.insert(slug, facets.len());
                    facets.push(Facet {
                        name: category.name.clone(),
                        slug: category.slug.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    facets
}

/// Insights sharing a category with the current one, in collection order,
/// excluding the current insight itself
pub fn related_insights(
    insights: &[Insight],
    current_id: &str,
    category_slug: &str,
    limit: usize,
) -> Vec<Insight> {
    insights
        .iter()
        .filter(|insight| insight.id != current_id && insight.has_category(category_slug))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::test_utils::InsightBuilder;

    fn collection() -> Vec<Insight> {
        vec![
            InsightBuilder::new("1", "Why Accurate Bookkeeping Matters")
                .categories(&[("Business Tips", "business-tips"), ("Featured", "featured")])
                .featured(true)
                .build(),
            InsightBuilder::new("2", "Budget 2024 Tax Changes")
                .categories(&[("Tax Updates", "tax-updates")])
                .build(),
            InsightBuilder::new("3", "Understanding CRA Audit Process")
                .excerpt("Prepare your business for an audit.")
                .categories(&[("Compliance", "compliance"), ("Tax Updates", "tax-updates")])
                .build(),
            InsightBuilder::new("4", "Cash Flow Basics")
                .body("<p>Reconcile monthly to avoid surprises.</p>")
                .categories(&[("Business Tips", "business-tips")])
                .build(),
        ]
    }

    #[test]
    fn test_unfiltered_returns_everything_in_order() {
        let page = InsightQuery::new().run(&collection());
        let ids: Vec<&str> = page.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(page.pagination.total, 4);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_search_title_excerpt_and_body() {
        let items = collection();

        let by_title = InsightQuery::new().search(Some("cra")).run(&items);
        assert_eq!(by_title.items.len(), 1);
        assert_eq!(by_title.items[0].id, "3");

        let by_excerpt = InsightQuery::new().search(Some("PREPARE YOUR")).run(&items);
        assert_eq!(by_excerpt.items[0].id, "3");

        let by_body = InsightQuery::new().search(Some("reconcile")).run(&items);
        assert_eq!(by_body.items.len(), 1);
        assert_eq!(by_body.items[0].id, "4");
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let page = InsightQuery::new().search(Some("   ")).run(&collection());
        assert_eq!(page.pagination.total, 4);
    }

    #[test]
    fn test_category_filter_matches_any_entry() {
        let page = InsightQuery::new()
            .category(Some("tax-updates"))
            .run(&collection());
        let ids: Vec<&str> = page.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_category_filter_is_case_sensitive() {
        let page = InsightQuery::new()
            .category(Some("Tax-Updates"))
            .run(&collection());
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 0);
    }

    #[test]
    fn test_featured_category_is_not_a_filter() {
        let items = collection();
        let featured = InsightQuery::new().category(Some("featured")).run(&items);
        let all = InsightQuery::new().run(&items);
        assert_eq!(featured.items, all.items);
        assert_eq!(featured.pagination.total, 4);
    }

    #[test]
    fn test_search_then_category() {
        let page = InsightQuery::new()
            .search(Some("audit"))
            .category(Some("business-tips"))
            .run(&collection());
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_pagination_slices() {
        let items = collection();
        let first = InsightQuery::new().limit(Some(3)).run(&items);
        assert_eq!(first.items.len(), 3);
        assert_eq!(first.pagination.total_pages, 2);

        let second = InsightQuery::new().page(Some(2)).limit(Some(3)).run(&items);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].id, "4");

        let beyond = InsightQuery::new().page(Some(9)).limit(Some(3)).run(&items);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.pagination.total, 4);
    }

    #[test]
    fn test_zero_page_and_limit_are_normalized() {
        let page = InsightQuery::new()
            .page(Some(0))
            .limit(Some(0))
            .run(&collection());
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.limit, 1);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let page = InsightQuery::new()
            .page(Some(usize::MAX))
            .limit(Some(usize::MAX))
            .run(&collection());
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_empty_collection() {
        let page = InsightQuery::new().run(&[]);
        assert!(page.items.is_empty());
        assert!(page.categories.is_empty());
        assert_eq!(page.pagination.total, 0);
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn test_facets_are_global_and_ordered() {
        let items = collection();
        let facets = category_facets(&items);
        let summary: Vec<(&str, usize)> =
            facets.iter().map(|f| (f.slug.as_str(), f.count)).collect();
        assert_eq!(
            summary,
            vec![("business-tips", 2), ("tax-updates", 2), ("compliance", 1)]
        );

        let filtered = InsightQuery::new().search(Some("no-match-at-all")).run(&items);
        assert!(filtered.items.is_empty());
        assert_eq!(filtered.categories, facets);
    }

    #[test]
    fn test_facets_skip_reserved_slugs_and_duplicates() {
        let mut odd = InsightBuilder::new("9", "Odd").build();
        odd.categories = vec![
            Category::uncategorized(),
            Category::new("Tax Updates", "tax-updates"),
            Category::new("Tax (again)", "tax-updates"),
        ];
        let facets = category_facets(&[odd]);
        assert_eq!(facets.len(), 1);
        assert_eq!(facets[0].name, "Tax Updates");
        assert_eq!(facets[0].count, 1);
    }

    #[test]
    fn test_related_excludes_current() {
        let items = collection();
        let related = related_insights(&items, "2", "tax-updates", DEFAULT_RELATED_LIMIT);
        let ids: Vec<&str> = related.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);

        let none = related_insights(&items, "1", "market-trends", DEFAULT_RELATED_LIMIT);
        assert!(none.is_empty());
    }

    #[test]
    fn test_related_respects_limit() {
        let items = collection();
        let related = related_insights(&items, "x", "business-tips", 1);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "1");
    }
}
