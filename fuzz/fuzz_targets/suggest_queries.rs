// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search-as-you-type suggestions.
//!
//! Suggest never fails, so every input must produce a response that respects
//! the hard cap and contains no two entries that normalize to the same key.

#![no_main]

use arbitrary::Arbitrary;
use essentia::testing::sample_index;
use essentia::{normalize, ProductIndex, SuggestOptions, SUGGEST_HARD_CAP};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct SuggestInput {
    query: String,
    limit: Option<u16>,
    include_categories: bool,
}

fuzz_target!(|input: SuggestInput| {
    static INDEX: OnceLock<ProductIndex> = OnceLock::new();
    let index = INDEX.get_or_init(sample_index);

    let query: String = input.query.chars().take(200).collect();
    let options = SuggestOptions {
        limit: input.limit.map(usize::from),
        include_categories: input.include_categories,
    };
    let response = index.suggest(&query, &options);

    // INVARIANT 1: Bounded by the requested limit and the hard cap
    assert!(response.suggestions.len() <= SUGGEST_HARD_CAP);
    if let Some(limit) = options.limit {
        assert!(response.suggestions.len() <= limit);
    }
    assert_eq!(response.stats.returned, response.suggestions.len());

    // INVARIANT 2: Unique by normalized key
    let mut seen = HashSet::new();
    for suggestion in &response.suggestions {
        assert!(seen.insert(normalize(suggestion)), "duplicate suggestion {suggestion:?}");
    }

    // INVARIANT 3: Related categories only when asked, and never for a blank query
    if !options.include_categories || normalize(&query).is_empty() {
        assert!(response.related_categories.is_empty());
    }

    // INVARIANT 4: Deterministic
    assert_eq!(index.suggest(&query, &options), response);
});
