// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted per-field approximate matching.
//!
//! For every record and every field value, find the best approximate occurrence
//! of the query (see [`approximate_find`]). Multi-word queries also try each
//! word on its own and average, so "lavender oil" still finds
//! "Lavender Essential Oil" even though the words are not adjacent.
//!
//! Scoring is embarrassingly parallel per record; with the `parallel` feature
//! the records are split across the rayon pool and collected back in build
//! order, so the output is byte-for-byte the sequential output.

use super::{FuzzyIndex, IndexRecord, ScoredMatch};
use crate::fuzzy::approximate_find;
use crate::scoring::ranking::compare_matches;
use crate::scoring::{combine, field_contribution, match_score, FieldWeights, MatchParams};
use crate::utils::normalize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The default [`FuzzyIndex`].
#[derive(Debug, Clone)]
pub struct WeightedFieldIndex {
    records: Vec<IndexRecord>,
    weights: FieldWeights,
    params: MatchParams,
}

/// A query, normalized and split once up front.
struct CompiledQuery {
    whole: Vec<char>,
    /// Individual words. Empty for single-word queries.
    words: Vec<Vec<char>>,
}

impl CompiledQuery {
    fn new(text: &str) -> Self {
        let normalized = normalize(text);
        let words: Vec<Vec<char>> = normalized.split(' ').map(|w| w.chars().collect()).collect();
        Self {
            whole: normalized.chars().collect(),
            words: if words.len() > 1 { words } else { Vec::new() },
        }
    }
}

impl WeightedFieldIndex {
    /// Best score of `pattern` anywhere in `value`, if within threshold.
    fn pattern_score(&self, pattern: &[char], value: &str) -> Option<f64> {
        let limit = self.params.scan_limit(pattern.len());
        approximate_find(pattern, value, limit, |o| {
            match_score(o.errors, pattern.len(), o.start, &self.params)
        })
        .map(|(_, score)| score)
        .filter(|score| *score <= self.params.threshold)
    }

    /// Best score for one field value: the whole query, or every word on
    /// its own (averaged) when that does better.
    fn value_score(&self, query: &CompiledQuery, value: &str) -> Option<f64> {
        let whole = self.pattern_score(&query.whole, value);
        if query.words.is_empty() {
            return whole;
        }

        let per_word: Option<Vec<f64>> = query
            .words
            .iter()
            .map(|word| self.pattern_score(word, value))
            .collect();
        let by_words = per_word.map(|scores| scores.iter().sum::<f64>() / scores.len() as f64);

        match (whole, by_words) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn score_record(&self, position: usize, record: &IndexRecord, query: &CompiledQuery) -> Option<ScoredMatch> {
        let contributions: Vec<_> = record
            .fields
            .iter()
            .filter_map(|(field, values)| {
                let best = values
                    .iter()
                    .filter_map(|value| self.value_score(query, value))
                    .min_by(f64::total_cmp)?;
                Some((*field, field_contribution(self.weights.weight(*field), best)))
            })
            .collect();

        let (score, best_field) = combine(&contributions, self.params.corroboration)?;
        Some(ScoredMatch {
            position,
            score,
            best_field,
        })
    }
}

impl FuzzyIndex for WeightedFieldIndex {
    fn build(records: Vec<IndexRecord>, weights: FieldWeights, params: MatchParams) -> Self {
        Self {
            records,
            weights,
            params,
        }
    }

    fn query(&self, text: &str) -> Vec<ScoredMatch> {
        let query = CompiledQuery::new(text);
        if query.whole.is_empty() {
            return Vec::new();
        }

        #[cfg(feature = "parallel")]
        let mut matches: Vec<ScoredMatch> = self
            .records
            .par_iter()
            .enumerate()
            .filter_map(|(position, record)| self.score_record(position, record, &query))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let mut matches: Vec<ScoredMatch> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(position, record)| self.score_record(position, record, &query))
            .collect();

        matches.sort_by(compare_matches);
        matches
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
