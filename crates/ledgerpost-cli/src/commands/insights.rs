//! Insight command implementations

use anyhow::{bail, Result};
use ledgerpost_core::{ContentStore, Insight, InsightQuery};

use super::{print_json, truncate};

fn print_insight_row(insight: &Insight) {
    let featured = if insight.is_featured { "★" } else { " " };
    println!(
        "   {} {:<18} │ {:<16} │ {}",
        featured,
        truncate(&insight.published_at, 18),
        truncate(&insight.primary_category.name, 16),
        truncate(&insight.title, 48)
    );
}

pub fn cmd_insights_list(
    store: &ContentStore,
    search: Option<&str>,
    category: Option<&str>,
    page: usize,
    limit: usize,
    json: bool,
) -> Result<()> {
    let query = InsightQuery::new()
        .search(search)
        .category(category)
        .page(Some(page))
        .limit(Some(limit));
    let result = store.list_insights(&query)?;

    if json {
        return print_json(&result);
    }

    if result.items.is_empty() {
        println!("No insights found.");
        if result.pagination.total > 0 {
            println!(
                "   Page {} is past the last page ({}).",
                result.pagination.page, result.pagination.total_pages
            );
        }
        return Ok(());
    }

    println!();
    println!(
        "📰 Insights (page {} of {}, {} total)",
        result.pagination.page, result.pagination.total_pages, result.pagination.total
    );
    println!("   ─────────────────────────────────────────────────────────────");

    for insight in &result.items {
        print_insight_row(insight);
    }

    Ok(())
}

pub fn cmd_insights_show(store: &ContentStore, slug: &str, json: bool) -> Result<()> {
    let Some(insight) = store.get_insight_by_slug(slug)? else {
        bail!("Insight not found: {}", slug);
    };

    if json {
        return print_json(&insight);
    }

    println!();
    println!("📰 {}", insight.title);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Date:       {}", insight.published_at);
    println!("   Read time:  {}", insight.read_time);
    println!(
        "   Categories: {}",
        insight
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    if let Some(author) = &insight.author {
        println!("   Author:     {}", author.name);
    }
    if !insight.tags.is_empty() {
        println!(
            "   Tags:       {}",
            insight
                .tags
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    println!("   Link:       {}", insight.link);
    println!();
    println!("   {}", insight.excerpt);

    Ok(())
}

pub fn cmd_insights_related(
    store: &ContentStore,
    slug: &str,
    limit: usize,
    json: bool,
) -> Result<()> {
    let Some(insight) = store.get_insight_by_slug(slug)? else {
        bail!("Insight not found: {}", slug);
    };

    let related =
        store.related_insights(&insight.id, &insight.primary_category.slug, limit)?;

    if json {
        return print_json(&related);
    }

    if related.is_empty() {
        println!("No related insights in {}.", insight.primary_category.name);
        return Ok(());
    }

    println!();
    println!("🔗 Related to \"{}\"", truncate(&insight.title, 48));
    println!("   ─────────────────────────────────────────────────────────────");

    for item in &related {
        print_insight_row(item);
    }

    Ok(())
}

pub fn cmd_categories(store: &ContentStore, json: bool) -> Result<()> {
    let facets = store.category_facets()?;

    if json {
        return print_json(&facets);
    }

    if facets.is_empty() {
        println!("No categories yet.");
        return Ok(());
    }

    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────────────────────────────────────");

    for facet in &facets {
        println!("   {:<24} {:<24} {:>4}", facet.name, facet.slug, facet.count);
    }

    Ok(())
}
