// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog parsing under adversarial input.
//!
//! A hand-edited catalog file can contain anything. The worst case should be
//! an error message, not a panic, and a catalog that does load must be
//! searchable.

#![no_main]

use essentia::{normalize, Catalog, ProductIndex, SearchConfig, SearchOptions, SuggestOptions};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(catalog) = Catalog::from_json_str(json) else {
        return;
    };

    // INVARIANT 1: Every product has a non-empty, unique, retrievable id
    for product in catalog.products() {
        assert!(!product.id.is_empty());
        assert_eq!(catalog.get(&product.id).map(|p| &p.name), Some(&product.name));
    }

    // INVARIANT 2: A loaded catalog indexes and answers queries
    let index = match ProductIndex::new(Arc::new(catalog), SearchConfig::default()) {
        Ok(index) => index,
        Err(e) => panic!("default config rejected: {e}"),
    };
    let first_name = index.catalog().products().first().map(|p| p.name.clone());
    if let Some(name) = first_name.filter(|n| !normalize(n).is_empty()) {
        if let Ok(response) = index.search(&name, &SearchOptions::default()) {
            assert!(response.total >= 1, "product not found by its own name {name:?}");
        }
        let _ = index.suggest(&name, &SuggestOptions::default());
    }
});
