// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two functions here: a bounded Levenshtein for whole-string comparisons, and
//! an unanchored variant that locates the query inside a longer field value.

mod levenshtein;

pub use levenshtein::*;
