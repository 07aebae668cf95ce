//! Category and collection facets.

use super::common::{index_of, make_product, search, SAMPLE, SHOP};
use essentia::SearchOptions;
use std::collections::HashSet;

#[test]
fn test_category_filter_is_subset_of_unfiltered() {
    let all = SAMPLE.search("oil", &SearchOptions::new().limit(100)).unwrap();
    let filtered = SAMPLE
        .search("oil", &SearchOptions::new().category("single-oils").limit(100))
        .unwrap();

    assert!(!filtered.results.is_empty());
    assert!(filtered.results.iter().all(|r| r.product.category == "single-oils"));

    let unfiltered_ids: HashSet<_> = all.ids().into_iter().collect();
    for id in filtered.ids() {
        assert!(unfiltered_ids.contains(id), "{id} missing from unfiltered results");
    }
    assert_eq!(filtered.stats.matched, all.stats.matched);
}

#[test]
fn test_filters_preserve_relative_order() {
    let all = SHOP.search("o", &SearchOptions::new().limit(100)).unwrap();
    let filtered = SHOP.search("o", &SearchOptions::new().category("blends").limit(100)).unwrap();

    let expected: Vec<_> = all
        .results
        .iter()
        .filter(|r| r.product.category == "blends")
        .map(|r| &r.product.id)
        .collect();
    assert_eq!(filtered.ids(), expected);
}

#[test]
fn test_collection_filter() {
    let response = SAMPLE
        .search("relax", &SearchOptions::new().collection("sleep"))
        .unwrap();
    assert!(!response.results.is_empty());
    assert!(response.results.iter().all(|r| r.product.in_collection("sleep")));
}

#[test]
fn test_filters_compose() {
    let response = SHOP
        .search(
            "sleep",
            &SearchOptions::new().category("blends").collection("sleep"),
        )
        .unwrap();
    assert_eq!(response.ids().len(), 1);
    assert_eq!(response.ids()[0].as_str(), "mezcla-calmante");
}

#[test]
fn test_all_means_unfiltered() {
    let plain = search(&SAMPLE, "mezcla");
    let all = SAMPLE
        .search("mezcla", &SearchOptions::new().category("all").collection("all"))
        .unwrap();
    assert_eq!(plain.ids(), all.ids());
    assert_eq!(plain.total, all.total);
}

#[test]
fn test_unknown_category_matches_nothing() {
    let response = SAMPLE
        .search("lavanda", &SearchOptions::new().category("perfumes"))
        .unwrap();
    assert!(response.results.is_empty());
    assert_eq!(response.total, 0);
    assert!(response.stats.matched > 0);
}

#[test]
fn test_total_counts_before_truncation() {
    let response = SAMPLE.search("lavanda", &SearchOptions::new().limit(1)).unwrap();
    assert_eq!(response.results.len(), 1);
    assert!(response.total >= 2);
    assert_eq!(response.stats.returned, 1);
    assert_eq!(response.stats.filtered, response.total);
}

#[test]
fn test_category_match_is_exact() {
    let index = index_of(vec![
        make_product("Lemon", "single-oils"),
        make_product("Lemon Drops", "single-oils-extra"),
    ]);
    let response = index
        .search("lemon", &SearchOptions::new().category("single-oils"))
        .unwrap();
    assert_eq!(response.ids().len(), 1);
    assert_eq!(response.ids()[0].as_str(), "lemon");
}
