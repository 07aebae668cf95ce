// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind product ranking.
//!
//! Two numbers per field, one per product:
//!
//! ```text
//! match score   s = errors / pattern_len + |start - location| / distance    (0 = perfect)
//! contribution  c = weight(field) * (1 - s)                                  (only if s <= threshold)
//! relevance     r = max(c) + corroboration * (sum(c) - max(c))
//! ```
//!
//! The match score is a fraction of the query that had to be edited plus a
//! penalty for how far into the field the match starts. A perfect name match
//! scores 1.0; the same word buried at character 40 of the description scores
//! `0.2 * 0.6 = 0.12`.
//!
//! # Key Invariant: Name Dominance
//!
//! With the default weights, a perfect name match beats a perfect English-name
//! match even after every other field corroborates it:
//!
//! ```text
//! 1.0 > 0.8 + 0.05 * (0.6 + 0.5 + 0.4 + 0.2)    (1.0 > 0.885)
//! ```

use crate::types::FieldKind;
use serde::{Deserialize, Serialize};

// =============================================================================
// DEFAULTS
// =============================================================================

pub const NAME_WEIGHT: f64 = 1.0;
pub const ENGLISH_NAME_WEIGHT: f64 = 0.8;
pub const TAGS_WEIGHT: f64 = 0.6;
pub const MAIN_BENEFITS_WEIGHT: f64 = 0.5;
pub const COLLECTIONS_WEIGHT: f64 = 0.4;
pub const DESCRIPTION_WEIGHT: f64 = 0.2;

/// Accept a field match when its score is at most this.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Expected match location (characters from the start of the field).
pub const DEFAULT_LOCATION: usize = 0;

/// Characters of drift from `location` that cost a full 1.0 of score.
pub const DEFAULT_DISTANCE: usize = 100;

/// Share of non-best field contributions added to relevance.
pub const DEFAULT_CORROBORATION: f64 = 0.05;

// =============================================================================
// PARAMETERS
// =============================================================================

/// Per-field importance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub name: f64,
    pub english_name: f64,
    pub tags: f64,
    pub main_benefits: f64,
    pub collections: f64,
    pub description: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: NAME_WEIGHT,
            english_name: ENGLISH_NAME_WEIGHT,
            tags: TAGS_WEIGHT,
            main_benefits: MAIN_BENEFITS_WEIGHT,
            collections: COLLECTIONS_WEIGHT,
            description: DESCRIPTION_WEIGHT,
        }
    }
}

impl FieldWeights {
    pub fn weight(&self, field: FieldKind) -> f64 {
        match field {
            FieldKind::Name => self.name,
            FieldKind::EnglishName => self.english_name,
            FieldKind::Tags => self.tags,
            FieldKind::MainBenefits => self.main_benefits,
            FieldKind::Collections => self.collections,
            FieldKind::Description => self.description,
        }
    }
}

/// Tuning knobs for approximate matching.
///
/// These are inherited tuning values, not derived ones. Keep them configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchParams {
    pub threshold: f64,
    pub location: usize,
    pub distance: usize,
    pub corroboration: f64,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            location: DEFAULT_LOCATION,
            distance: DEFAULT_DISTANCE,
            corroboration: DEFAULT_CORROBORATION,
        }
    }
}

impl MatchParams {
    /// How many characters of a field can possibly hold an acceptable match
    /// for a pattern of `pattern_len` characters.
    ///
    /// Past `location + threshold * distance` the proximity term alone exceeds
    /// the threshold, so only spans starting before that point matter. A span
    /// may be up to `pattern_len + max_errors` characters long.
    pub fn scan_limit(&self, pattern_len: usize) -> usize {
        if self.distance == 0 {
            return usize::MAX;
        }
        let reach = (self.threshold * self.distance as f64).ceil() as usize;
        let max_errors = (self.threshold * pattern_len as f64).floor() as usize;
        self.location
            .saturating_add(reach)
            .saturating_add(pattern_len)
            .saturating_add(max_errors)
    }
}

// =============================================================================
// SCORES
// =============================================================================

/// Proximity penalty for a match starting at `start`.
///
/// With `distance == 0` any drift from `location` is a full penalty.
pub fn proximity_penalty(start: usize, location: usize, distance: usize) -> f64 {
    let drift = start.abs_diff(location);
    if distance == 0 {
        return if drift == 0 { 0.0 } else { 1.0 };
    }
    drift as f64 / distance as f64
}

/// Match score for one occurrence. 0.0 is a perfect match at `location`.
pub fn match_score(errors: usize, pattern_len: usize, start: usize, params: &MatchParams) -> f64 {
    if pattern_len == 0 {
        return 1.0;
    }
    errors as f64 / pattern_len as f64 + proximity_penalty(start, params.location, params.distance)
}

/// Weighted contribution of a field whose best match scored `score`.
pub fn field_contribution(weight: f64, score: f64) -> f64 {
    weight * (1.0 - score).max(0.0)
}

/// Fold per-field contributions into a relevance and the field that won.
///
/// Returns `None` when there are no contributions. Ties between fields go to
/// the earlier (heavier) field in `contributions` order.
pub fn combine(contributions: &[(FieldKind, f64)], corroboration: f64) -> Option<(f64, FieldKind)> {
    let (best_field, best) = contributions.iter().copied().fold(None, |acc, (field, c)| match acc {
        Some((_, best)) if best >= c => acc,
        _ => Some((field, c)),
    })?;
    let rest: f64 = contributions.iter().map(|(_, c)| c).sum::<f64>() - best;
    Some((best + corroboration * rest, best_field))
}
