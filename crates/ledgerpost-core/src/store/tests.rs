//! Content store tests

use super::*;
use crate::models::{Category, InsightDraft, InsightPatch, UNCATEGORIZED};
use crate::query::InsightQuery;
use crate::test_utils::{numbered_insights, store_with, InsightBuilder};

#[test]
fn test_seeded_store() {
    let store = ContentStore::seeded().unwrap();
    assert_eq!(store.insight_count().unwrap(), 12);
    assert_eq!(store.list_services().len(), 8);
}

#[test]
fn test_from_parts_rejects_duplicate_slugs() {
    let result = ContentStore::from_parts(
        vec![
            InsightBuilder::new("1", "Twice").build(),
            InsightBuilder::new("2", "Twice").build(),
        ],
        vec![],
    );
    match result {
        Err(Error::Seed(msg)) => assert!(msg.contains("duplicate slug 'twice'")),
        other => panic!("expected seed error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_from_parts_tolerates_missing_categories() {
    let mut bare = InsightBuilder::new("1", "Bare").build();
    bare.categories.clear();
    let store = ContentStore::from_parts(vec![bare], vec![]).unwrap();
    assert_eq!(store.insight_count().unwrap(), 1);
}

#[test]
fn test_get_insight_by_slug() {
    let store = store_with(numbered_insights(3, 1));

    let found = store.get_insight_by_slug("insight-number-2").unwrap();
    assert_eq!(found.map(|i| i.id), Some("2".to_string()));

    // Exact match only, no substring or case folding
    assert!(store.get_insight_by_slug("insight-number").unwrap().is_none());
    assert!(store.get_insight_by_slug("Insight-Number-2").unwrap().is_none());
}

#[test]
fn test_list_uses_current_contents() {
    let store = store_with(numbered_insights(2, 2));
    store
        .create_insight(InsightDraft {
            title: Some("Fresh Tax Post".to_string()),
            category: Some(Category::new("Tax Updates", "tax-updates")),
            ..Default::default()
        })
        .unwrap();

    let page = store
        .list_insights(&InsightQuery::new().category(Some("tax-updates")))
        .unwrap();
    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.items.last().unwrap().title, "Fresh Tax Post");
    assert_eq!(page.categories[0].count, 3);
}

#[test]
fn test_create_fills_defaults() {
    let store = store_with(vec![]);
    let insight = store
        .create_insight(InsightDraft {
            title: Some("New Rules for  Payroll".to_string()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(insight.slug, "new-rules-for-payroll");
    assert_eq!(insight.link, "/insights/new-rules-for-payroll");
    assert_eq!(insight.excerpt, "");
    assert_eq!(insight.body.as_deref(), Some(""));
    assert_eq!(insight.primary_category.slug, UNCATEGORIZED);
    assert_eq!(insight.categories, vec![Category::uncategorized()]);
    assert!(!insight.is_featured);
    assert_eq!(insight.read_time, "5 min read");
    assert_eq!(insight.thumbnail_url, "/slider-1.webp");
    assert!(insight.tags.is_empty());
    assert!(!insight.published_at.is_empty());
}

#[test]
fn test_create_without_title() {
    let store = store_with(vec![]);
    let insight = store.create_insight(InsightDraft::default()).unwrap();
    assert_eq!(insight.title, "Untitled");
    assert_eq!(insight.slug, "untitled");
}

#[test]
fn test_create_category_becomes_categories() {
    let store = store_with(vec![]);
    let insight = store
        .create_insight(InsightDraft {
            title: Some("Compliance Post".to_string()),
            category: Some(Category::new("Compliance", "compliance")),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(insight.categories, vec![Category::new("Compliance", "compliance")]);
}

#[test]
fn test_create_appends_with_fresh_ids() {
    let store = store_with(numbered_insights(3, 0));
    let a = store
        .create_insight(InsightDraft {
            title: Some("First".to_string()),
            ..Default::default()
        })
        .unwrap();
    let b = store
        .create_insight(InsightDraft {
            title: Some("Second".to_string()),
            ..Default::default()
        })
        .unwrap();

    assert_ne!(a.id, b.id);
    assert!(b.id.parse::<u64>().unwrap() > a.id.parse::<u64>().unwrap());

    let page = store.list_insights(&InsightQuery::new()).unwrap();
    let ids: Vec<&str> = page.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", a.id.as_str(), b.id.as_str()]);
}

#[test]
fn test_create_never_reuses_deleted_id() {
    let store = store_with(vec![]);
    let first = store.create_insight(InsightDraft::default()).unwrap();
    store.delete_insight(&first.id).unwrap();
    let second = store.create_insight(InsightDraft::default()).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn test_create_rejects_taken_slug() {
    let store = store_with(numbered_insights(1, 0));
    let result = store.create_insight(InsightDraft {
        title: Some("Insight Number 1".to_string()),
        ..Default::default()
    });
    assert!(matches!(result, Err(Error::Conflict(_))));
    assert_eq!(store.insight_count().unwrap(), 1);
}

#[test]
fn test_create_rejects_unsafe_explicit_slug() {
    let store = store_with(vec![]);
    let result = store.create_insight(InsightDraft {
        slug: Some("Has Spaces".to_string()),
        ..Default::default()
    });
    assert!(matches!(result, Err(Error::InvalidData(_))));
}

#[test]
fn test_update_merges_in_place() {
    let store = store_with(numbered_insights(3, 0));
    let patch = InsightPatch {
        title: Some("Renamed".to_string()),
        is_featured: Some(true),
        ..Default::default()
    };

    let updated = store.update_insight("2", patch).unwrap();
    assert_eq!(updated.title, "Renamed");
    assert!(updated.is_featured);
    assert_eq!(updated.slug, "insight-number-2");

    // Position in the collection is unchanged
    let page = store.list_insights(&InsightQuery::new()).unwrap();
    assert_eq!(page.items[1].title, "Renamed");
}

#[test]
fn test_update_not_found() {
    let store = store_with(numbered_insights(1, 0));
    let result = store.update_insight("missing", InsightPatch::default());
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_update_slug_conflict() {
    let store = store_with(numbered_insights(2, 0));
    let result = store.update_insight(
        "2",
        InsightPatch {
            slug: Some("insight-number-1".to_string()),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(Error::Conflict(_))));

    // Re-sending its own slug is fine
    let same = store.update_insight(
        "2",
        InsightPatch {
            slug: Some("insight-number-2".to_string()),
            ..Default::default()
        },
    );
    assert!(same.is_ok());
}

#[test]
fn test_delete_twice() {
    let store = store_with(numbered_insights(3, 0));

    let removed = store.delete_insight("2").unwrap();
    assert_eq!(removed.id, "2");
    assert_eq!(store.insight_count().unwrap(), 2);

    let again = store.delete_insight("2");
    assert!(matches!(again, Err(Error::NotFound(_))));
    assert_eq!(store.insight_count().unwrap(), 2);

    let page = store.list_insights(&InsightQuery::new()).unwrap();
    let ids: Vec<&str> = page.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_clones_share_state() {
    let store = store_with(vec![]);
    let handle = store.clone();
    handle.create_insight(InsightDraft::default()).unwrap();
    assert_eq!(store.insight_count().unwrap(), 1);
}

#[test]
fn test_concurrent_creates_keep_unique_ids_and_slugs() {
    let store = store_with(vec![]);
    let handles: Vec<_> = (0..8)
        .map(|n| {
            let store = store.clone();
            std::thread::spawn(move || {
                store.create_insight(InsightDraft {
                    title: Some(format!("Post {}", n % 4)),
                    ..Default::default()
                })
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let created = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(Error::Conflict(_))))
        .count();
    assert_eq!(created, 4);
    assert_eq!(conflicts, 4);

    let page = store.list_insights(&InsightQuery::new()).unwrap();
    assert!(crate::seed::validate_insights(&page.items).is_empty());
}

#[test]
fn test_services_lookup() {
    let store = store_with(vec![]);
    assert_eq!(store.list_services().len(), 2);
    assert_eq!(store.get_service("tax").map(|s| s.number), Some("02".to_string()));
    assert!(store.get_service("Tax").is_none());
}

#[test]
fn test_create_when_ids_exhausted() {
    let store = store_with(vec![InsightBuilder::new(&u64::MAX.to_string(), "Edge").build()]);

    let result = store.create_insight(InsightDraft::default());
    assert!(matches!(result, Err(Error::Conflict(_))));

    // The lock is not poisoned and nothing was appended
    assert_eq!(store.insight_count().unwrap(), 1);
    assert!(store.list_insights(&InsightQuery::new()).is_ok());
}

#[test]
fn test_create_takes_last_free_id() {
    let almost = (u64::MAX - 1).to_string();
    let store = store_with(vec![InsightBuilder::new(&almost, "Edge").build()]);

    let created = store.create_insight(InsightDraft::default()).unwrap();
    assert_eq!(created.id, u64::MAX.to_string());
    assert!(matches!(
        store.create_insight(InsightDraft {
            title: Some("Another".to_string()),
            ..Default::default()
        }),
        Err(Error::Conflict(_))
    ));
}
