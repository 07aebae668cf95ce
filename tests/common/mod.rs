//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use essentia::{Catalog, Product, ProductIndex, SearchConfig, SearchOptions, SearchResponse};
use std::path::PathBuf;
use std::sync::{Arc, LazyLock};

// Re-export canonical test utilities from essentia::testing
pub use essentia::testing::{make_full_product, make_product, sample_catalog, sample_index, sample_products};

// ============================================================================
// FIXTURES
// ============================================================================

/// The shop catalog shipped in `data/`.
pub fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/products.json")
}

/// Sample catalog index, built once per test binary.
pub static SAMPLE: LazyLock<ProductIndex> = LazyLock::new(sample_index);

/// Index over `data/products.json`, built once per test binary.
pub static SHOP: LazyLock<ProductIndex> = LazyLock::new(|| {
    let catalog = Catalog::from_path(&catalog_path()).expect("data/products.json loads");
    ProductIndex::new(Arc::new(catalog), SearchConfig::default()).expect("default config is valid")
});

/// Index an ad-hoc product list with default configuration.
pub fn index_of(products: Vec<Product>) -> ProductIndex {
    let catalog = Catalog::new(products).expect("test catalog is valid");
    ProductIndex::new(Arc::new(catalog), SearchConfig::default()).expect("default config is valid")
}

// ============================================================================
// HELPERS
// ============================================================================

/// Product names of a response, in rank order.
pub fn names<'a>(response: &SearchResponse<'a>) -> Vec<&'a str> {
    response.results.iter().map(|r| r.product.name.as_str()).collect()
}

/// Search with default options, panicking on error.
pub fn search<'a>(index: &'a ProductIndex, query: &str) -> SearchResponse<'a> {
    index
        .search(query, &SearchOptions::default())
        .unwrap_or_else(|e| panic!("search {query:?} failed: {e}"))
}
