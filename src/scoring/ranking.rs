// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: how matches and suggestions get sorted.
//!
//! Products sort by relevance, then by catalog position. Suggestions sort by
//! "does it start with what you typed", then by length. Both comparators are
//! total, so `sort_by` with them is deterministic run to run.

use crate::index::ScoredMatch;
use std::cmp::Ordering;

/// Compare two matches for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher relevance first)
/// 2. **Position** - ascending catalog order, so equal scores keep build order
pub fn compare_matches(a: &ScoredMatch, b: &ScoredMatch) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.position.cmp(&b.position),
    }
}

/// Compare two suggestion candidates for a normalized query.
///
/// Sort order:
/// 1. **Prefix** - candidates starting with the query come first
/// 2. **Length** - shorter first (in characters); short completions are usually
///    the more specific product
///
/// Candidates equal on both keep their collection order under a stable sort,
/// which encodes source priority (names before tags before keywords).
pub fn compare_suggestions(query: &str, a: &SuggestionKey, b: &SuggestionKey) -> Ordering {
    let a_prefix = a.normalized.starts_with(query);
    let b_prefix = b.normalized.starts_with(query);
    b_prefix
        .cmp(&a_prefix)
        .then_with(|| a.char_len.cmp(&b.char_len))
}

/// Precomputed sort key for one suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionKey {
    pub normalized: String,
    pub char_len: usize,
}

impl SuggestionKey {
    pub fn new(display: &str, normalized: String) -> Self {
        Self {
            normalized,
            char_len: display.chars().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldKind;
    use crate::utils::normalize;

    fn scored(position: usize, score: f64) -> ScoredMatch {
        ScoredMatch {
            position,
            score,
            best_field: FieldKind::Name,
        }
    }

    fn key(display: &str) -> SuggestionKey {
        SuggestionKey::new(display, normalize(display))
    }

    #[test]
    fn test_higher_score_first() {
        assert_eq!(compare_matches(&scored(5, 0.9), &scored(0, 0.4)), Ordering::Less);
    }

    #[test]
    fn test_equal_score_keeps_build_order() {
        assert_eq!(compare_matches(&scored(1, 0.5), &scored(2, 0.5)), Ordering::Less);
        assert_eq!(compare_matches(&scored(2, 0.5), &scored(1, 0.5)), Ordering::Greater);
    }

    #[test]
    fn test_prefix_beats_shorter_substring() {
        let query = normalize("Lav");
        let mut candidates = vec![key("Wild Lavender"), key("Lavender Oil")];
        candidates.sort_by(|a, b| compare_suggestions(&query, a, b));
        assert_eq!(candidates[0].normalized, "lavender oil");
        assert_eq!(candidates[1].normalized, "wild lavender");

        // Even a longer prefix match outranks a short substring match
        let ord = compare_suggestions("lav", &key("Lavender Essential Oil Blend"), &key("Wild Lav"));
        assert_eq!(ord, Ordering::Less);
    }

    #[test]
    fn test_shorter_wins_within_prefix_group() {
        let ord = compare_suggestions("lav", &key("Lavanda"), &key("Lavender Oil"));
        assert_eq!(ord, Ordering::Less);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // "Limón" is 5 chars / 6 bytes, "Limone" is 6 chars / 6 bytes
        assert_eq!(key("Limón").char_len, 5);
        let ord = compare_suggestions("lim", &key("Limón"), &key("Limone"));
        assert_eq!(ord, Ordering::Less);
    }
}
