// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the edit-distance matchers.
//!
//! `approximate_find` must agree with common sense on arbitrary Unicode: an
//! exact substring costs nothing, errors never exceed the pattern length, and
//! reported offsets stay inside the text. `levenshtein_within` must be
//! symmetric and accept any string against itself.

#![no_main]

use arbitrary::Arbitrary;
use essentia::fuzzy::{approximate_find, levenshtein_within};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern: String,
    text: String,
    scan_limit: u8,
    max_edits: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths by chars to avoid timeouts without splitting a code point
    let pattern: Vec<char> = input.pattern.chars().take(32).collect();
    let text: String = input.text.chars().take(200).collect();
    let text_len = text.chars().count();

    let found = approximate_find(&pattern, &text, usize::MAX, |o| o.errors as f64);

    // INVARIANT 1: Empty pattern finds nothing; empty text finds nothing
    if pattern.is_empty() || text.is_empty() {
        assert!(found.is_none());
    }

    if let Some((hit, score)) = found {
        // INVARIANT 2: Errors bounded by pattern length, offsets inside the text
        assert!(hit.errors <= pattern.len());
        assert!(hit.start <= text_len);
        assert_eq!(score, hit.errors as f64);

        // INVARIANT 3: An exact occurrence costs zero edits
        let needle: String = pattern.iter().collect();
        if text.contains(&needle) {
            assert_eq!(hit.errors, 0, "exact occurrence of {needle:?} missed in {text:?}");
        }
    }

    // INVARIANT 4: A scan limit can only make the best match worse
    if let (Some((full, _)), Some((limited, _))) = (
        found,
        approximate_find(&pattern, &text, usize::from(input.scan_limit), |o| o.errors as f64),
    ) {
        assert!(limited.errors >= full.errors);
    }

    // INVARIANT 5: Bounded Levenshtein is symmetric and reflexive
    let needle: String = pattern.iter().collect();
    let max = usize::from(input.max_edits % 4);
    assert_eq!(
        levenshtein_within(&needle, &text, max),
        levenshtein_within(&text, &needle, max)
    );
    assert!(levenshtein_within(&text, &text, 0));
});
