// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries and facet combinations at the sample catalog. The
//! only acceptable failure is `InvalidQuery` for a blank query. Results must
//! stay within the limit and inside the requested facets, sorted and unique.

#![no_main]

use arbitrary::Arbitrary;
use essentia::testing::sample_index;
use essentia::{Error, ProductIndex, SearchOptions};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    query: String,
    category: Option<String>,
    collection: Option<String>,
    limit: Option<u8>,
    include_suggestions: bool,
}

fuzz_target!(|input: SearchInput| {
    static INDEX: OnceLock<ProductIndex> = OnceLock::new();
    let index = INDEX.get_or_init(sample_index);

    // Cap query length by chars to avoid timeouts
    let query: String = input.query.chars().take(200).collect();
    let options = SearchOptions {
        category: input.category,
        collection: input.collection,
        limit: input.limit.map(usize::from),
        include_suggestions: input.include_suggestions,
    };

    let response = match index.search(&query, &options) {
        Ok(response) => response,
        Err(Error::InvalidQuery) => {
            assert!(query.trim().is_empty(), "non-blank query {query:?} rejected");
            return;
        }
        Err(e) => panic!("unexpected error for {query:?}: {e}"),
    };

    // INVARIANT 1: Results bounded by limit and total
    let limit = index.config().limits.search(options.limit);
    assert!(response.results.len() <= limit);
    assert!(response.results.len() <= response.total);

    // INVARIANT 2: Scores positive and finite, non-increasing
    for result in &response.results {
        assert!(result.score.is_finite() && result.score > 0.0, "score {} out of range", result.score);
    }
    for pair in response.results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results not sorted");
    }

    // INVARIANT 3: No duplicate products
    let mut seen = HashSet::new();
    for result in &response.results {
        assert!(seen.insert(&result.product.id), "duplicate product {}", result.product.id);
    }

    // INVARIANT 4: Facets respected
    for result in &response.results {
        if let Some(category) = options.category.as_deref().filter(|c| *c != essentia::search::ALL) {
            assert_eq!(result.product.category, category);
        }
        if let Some(collection) = options.collection.as_deref().filter(|c| *c != essentia::search::ALL) {
            assert!(result.product.in_collection(collection));
        }
    }

    // INVARIANT 5: Suggestions only when asked
    if !options.include_suggestions {
        assert!(response.suggestions.is_empty());
    }
});
