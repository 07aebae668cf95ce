// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance, anchored and unanchored.
//!
//! [`levenshtein_within`] is the classic bounded comparison of two whole strings.
//! [`approximate_find`] is Sellers' variant: the pattern may start anywhere in the
//! text for free, so it answers "where in this field does the query almost
//! appear, and with how many edits?". That is the question product search asks.
//!
//! Both work on `char`s, never bytes, so "limón" is five characters.

/// Are these strings within `max` edits of each other?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If length difference exceeds `max`, return false immediately
/// 2. If minimum row value exceeds `max`, abandon the DP early
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Length difference is a lower bound on edit distance
    if (a_len as isize - b_len as isize).unsigned_abs() > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}

/// One approximate occurrence of a pattern inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// Edits needed to turn the matched text span into the pattern.
    pub errors: usize,
    /// Character offset where the matched span starts.
    pub start: usize,
}

/// Find approximate occurrences of `pattern` in `text`, best-first by `rank`.
///
/// Column-wise DP over the text with a free starting row (Sellers 1980). Each
/// cell carries the start offset of the alignment that produced it, so every
/// text position yields a candidate `(errors, start)` for a span ending there.
/// `rank` turns a candidate into a score (lower is better); the best-ranked
/// candidate is returned, earliest on ties.
///
/// Only the first `scan_limit` characters of `text` are examined. Callers use
/// this to skip spans whose distance from the expected location alone would
/// exceed their threshold.
///
/// Returns `None` for an empty pattern.
pub fn approximate_find<F>(
    pattern: &[char],
    text: &str,
    scan_limit: usize,
    mut rank: F,
) -> Option<(Occurrence, f64)>
where
    F: FnMut(Occurrence) -> f64,
{
    let m = pattern.len();
    if m == 0 {
        return None;
    }

    // Column before any text char: pattern prefix of length i costs i deletions.
    let mut cost: Vec<usize> = (0..=m).collect();
    let mut start: Vec<usize> = vec![0; m + 1];
    let mut next_cost = vec![0usize; m + 1];
    let mut next_start = vec![0usize; m + 1];

    let mut best: Option<(Occurrence, f64)> = None;

    for (j, c) in text.chars().take(scan_limit).enumerate() {
        next_cost[0] = 0;
        next_start[0] = j + 1;

        for i in 1..=m {
            let substitute = cost[i - 1] + usize::from(pattern[i - 1] != c);
            let skip_text = cost[i] + 1;
            let skip_pattern = next_cost[i - 1] + 1;

            // Prefer the diagonal on ties: it keeps spans tight.
            let (value, origin) = if substitute <= skip_text && substitute <= skip_pattern {
                (substitute, start[i - 1])
            } else if skip_text <= skip_pattern {
                (skip_text, start[i])
            } else {
                (skip_pattern, next_start[i - 1])
            };
            next_cost[i] = value;
            next_start[i] = origin;
        }

        std::mem::swap(&mut cost, &mut next_cost);
        std::mem::swap(&mut start, &mut next_start);

        let occurrence = Occurrence {
            errors: cost[m],
            start: start[m],
        };
        let score = rank(occurrence);
        if best.map_or(true, |(_, s)| score < s) {
            best = Some((occurrence, score));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Rank by errors only, like a plain Sellers search.
    fn find(pattern: &str, text: &str) -> Option<Occurrence> {
        approximate_find(&chars(pattern), text, usize::MAX, |o| o.errors as f64).map(|(o, _)| o)
    }

    #[test]
    fn test_exact_match() {
        assert!(levenshtein_within("lavanda", "lavanda", 0));
    }

    #[test]
    fn test_one_edit() {
        assert!(levenshtein_within("menta", "manta", 1));
        assert!(levenshtein_within("menta", "ment", 1));
        assert!(levenshtein_within("menta", "mentaa", 1));
    }

    #[test]
    fn test_early_exit() {
        assert!(!levenshtein_within("a", "abcdef", 1));
    }

    #[test]
    fn test_unicode_is_char_based() {
        assert!(levenshtein_within("limon", "limón", 1));
        assert!(!levenshtein_within("limon", "limón", 0));
    }

    #[test]
    fn test_find_exact_substring() {
        let hit = find("oil", "fractionated coconut oil").unwrap();
        assert_eq!(hit, Occurrence { errors: 0, start: 21 });
    }

    #[test]
    fn test_find_prefers_earliest_on_ties() {
        let hit = find("tea", "tea tree tea").unwrap();
        assert_eq!(hit.start, 0);
    }

    #[test]
    fn test_find_with_typo() {
        // "lavendr" is "lavender" minus one char
        let hit = find("lavendr", "wild lavender").unwrap();
        assert_eq!(hit.errors, 1);
        assert_eq!(hit.start, 5);
    }

    #[test]
    fn test_find_pattern_longer_than_text() {
        let hit = find("peppermint", "pepper").unwrap();
        assert_eq!(hit.errors, 4);
    }

    #[test]
    fn test_find_respects_scan_limit() {
        assert_eq!(find("oil", "").map(|o| o.errors), None);
        let hit = approximate_find(&chars("oil"), "xxxxxxxxxx oil", 5, |o| o.errors as f64)
            .map(|(o, _)| o)
            .unwrap();
        assert!(hit.errors > 0, "exact occurrence lies beyond the scan limit");
    }

    #[test]
    fn test_find_empty_pattern() {
        assert!(approximate_find(&[], "anything", usize::MAX, |_| 0.0).is_none());
    }

    #[test]
    fn test_rank_can_trade_errors_for_position() {
        // One typo at the start beats an exact hit far away when position costs more.
        let (hit, _) = approximate_find(&chars("mint"), "mant ................ mint", usize::MAX, |o| {
            o.errors as f64 + o.start as f64 * 0.5
        })
        .unwrap();
        assert_eq!(hit.start, 0);
        assert_eq!(hit.errors, 1);
    }
}
