//! Inputs at the edges: empty, huge, odd characters, odd limits.

use super::common::{index_of, make_product, names, search, SAMPLE};
use essentia::{Error, SearchOptions};

#[test]
fn test_empty_query_is_invalid() {
    for query in ["", " ", "\t\n", "   \u{3000}  "] {
        let result = SAMPLE.search(query, &SearchOptions::default());
        assert!(matches!(result, Err(Error::InvalidQuery)), "{query:?} should be rejected");
    }
}

#[test]
fn test_bare_product_matchable_by_name() {
    let response = search(&SAMPLE, "crema hidratante");
    assert_eq!(names(&response)[0], "Crema Hidratante de Lavanda");
}

#[test]
fn test_surrounding_whitespace_ignored() {
    assert_eq!(search(&SAMPLE, "  menta  ").ids(), search(&SAMPLE, "menta").ids());
}

#[test]
fn test_no_match_is_ok_and_empty() {
    let response = search(&SAMPLE, "zzzzxxxxqqqq");
    assert!(response.results.is_empty());
    assert_eq!(response.total, 0);
    assert_eq!(response.stats.matched, 0);
}

#[test]
fn test_odd_characters_do_not_panic() {
    for query in ["🌿", "\0", "ล้มเหลว", "a\u{0301}", "%%%", "((((", "\u{202E}lavanda"] {
        assert!(SAMPLE.search(query, &SearchOptions::default()).is_ok(), "{query:?}");
    }
}

#[test]
fn test_very_long_query() {
    let query = "lavanda ".repeat(200);
    let response = SAMPLE.search(&query, &SearchOptions::default()).unwrap();
    assert!(response.results.len() <= 20);
}

#[test]
fn test_limit_zero_returns_nothing_but_counts() {
    let response = SAMPLE.search("lavanda", &SearchOptions::new().limit(0)).unwrap();
    assert!(response.results.is_empty());
    assert!(response.total > 0);
}

#[test]
fn test_default_and_max_limits() {
    let products = (0..150).map(|i| make_product(&format!("Lemon {i}"), "single-oils")).collect();
    let index = index_of(products);

    let default = index.search("lemon", &SearchOptions::default()).unwrap();
    assert_eq!(default.results.len(), 20);
    assert_eq!(default.total, 150);

    let capped = index.search("lemon", &SearchOptions::new().limit(1_000)).unwrap();
    assert_eq!(capped.results.len(), 100);
}

#[test]
fn test_empty_catalog() {
    let index = index_of(Vec::new());
    let response = index.search("lavanda", &SearchOptions::default()).unwrap();
    assert!(response.results.is_empty());
}
