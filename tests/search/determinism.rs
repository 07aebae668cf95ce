//! Same input, same output. Across calls and across threads.

use super::common::{index_of, make_product, sample_catalog, SAMPLE, SHOP};
use essentia::{ProductIndex, SearchConfig, SearchOptions, SuggestOptions};
use std::sync::Arc;

fn fingerprint(index: &ProductIndex, query: &str) -> Vec<(String, u64)> {
    index
        .search(query, &SearchOptions::new().limit(100))
        .unwrap()
        .results
        .iter()
        .map(|r| (r.product.id.to_string(), r.score.to_bits()))
        .collect()
}

#[test]
fn test_repeated_search_identical() {
    for query in ["lavanda", "oil", "mezcla", "fresh", "sleep"] {
        assert_eq!(fingerprint(&SHOP, query), fingerprint(&SHOP, query), "{query}");
    }
}

#[test]
fn test_rebuilt_index_identical() {
    let rebuilt = ProductIndex::new(sample_catalog(), SearchConfig::default()).unwrap();
    for query in ["lavanda", "oil", "blend"] {
        assert_eq!(fingerprint(&SAMPLE, query), fingerprint(&rebuilt, query), "{query}");
    }
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    let products = vec![
        make_product("Oil Blend C", "blends"),
        make_product("Oil Blend A", "blends"),
        make_product("Oil Blend B", "blends"),
    ];
    let index = index_of(products);
    let ids: Vec<String> = fingerprint(&index, "oil blend").into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["oil-blend-c", "oil-blend-a", "oil-blend-b"]);
}

#[test]
fn test_concurrent_queries_agree() {
    let index = Arc::new(ProductIndex::new(sample_catalog(), SearchConfig::default()).unwrap());
    let queries = ["lavanda", "menta", "oil", "limon", "blend", "difusor"];
    let expected: Vec<_> = queries.iter().map(|q| fingerprint(&index, q)).collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            let index = Arc::clone(&index);
            let expected = &expected;
            s.spawn(move || {
                for (query, want) in queries.iter().zip(expected) {
                    assert_eq!(&fingerprint(&index, query), want);
                }
            });
        }
    });
}

#[test]
fn test_repeated_suggest_identical() {
    for query in ["", "lav", "mez", "o"] {
        let a = SHOP.suggest(query, &SuggestOptions::default());
        let b = SHOP.suggest(query, &SuggestOptions::default());
        assert_eq!(a, b, "{query:?}");
    }
}
