// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-as-you-type suggestions.
//!
//! Suggestions are plain substring completions, not fuzzy matches: someone
//! typing "lav" wants "Lavanda" and "Lavender", not "Lemon". Candidates come
//! from four sources, in priority order:
//!
//! 1. product names and English names
//! 2. tags and main-benefit phrases
//! 3. category keywords (substring either way, so "lavender oil" hits "lavender")
//! 4. popular terms, only while the list is still short
//!
//! Source order matters twice: it decides which spelling survives
//! deduplication, and it breaks ties in the final ranking.
//!
//! **Invariant**: a suggestion appears at most once, compared by normalized
//! text ("Lavanda" and "lavanda" are the same suggestion).

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::scoring::ranking::{compare_suggestions, SuggestionKey};
use crate::utils::{contains_normalized, normalize, overlaps_normalized};
use std::collections::HashSet;

/// A suggestable string with its normalized form computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Term {
    pub display: String,
    pub normalized: String,
}

impl Term {
    fn new(display: &str) -> Option<Self> {
        let normalized = normalize(display);
        (!normalized.is_empty()).then(|| Self {
            display: display.trim().to_string(),
            normalized,
        })
    }
}

/// Everything suggestions are drawn from, normalized at index build.
#[derive(Debug, Clone, Default)]
pub(crate) struct SuggestionSource {
    names: Vec<Term>,
    phrases: Vec<Term>,
    keywords: Vec<Term>,
    popular: Vec<Term>,
    /// Category key and its normalized keywords, in key order.
    categories: Vec<(String, Vec<String>)>,
}

impl SuggestionSource {
    pub fn build(catalog: &Catalog, config: &SearchConfig) -> Self {
        let mut source = Self::default();

        for product in catalog.products() {
            source.names.extend(Term::new(&product.name));
            source.names.extend(product.english_name.as_deref().and_then(Term::new));
        }
        for product in catalog.products() {
            for phrase in product.tags.iter().chain(&product.main_benefits) {
                source.phrases.extend(Term::new(phrase));
            }
        }
        for (category, keywords) in &config.category_keywords {
            let terms: Vec<Term> = keywords.iter().filter_map(|k| Term::new(k)).collect();
            source
                .categories
                .push((category.clone(), terms.iter().map(|t| t.normalized.clone()).collect()));
            source.keywords.extend(terms);
        }
        source.popular = config.popular_terms.iter().filter_map(|t| Term::new(t)).collect();

        source
    }

    /// Popular terms as configured, for the empty query.
    pub fn popular(&self, limit: usize) -> Vec<String> {
        self.popular.iter().take(limit).map(|t| t.display.clone()).collect()
    }

    pub fn popular_count(&self) -> usize {
        self.popular.len()
    }

    /// Collect, deduplicate and rank candidates for a normalized, non-empty query.
    pub fn candidates(&self, query: &str, limit: usize) -> SuggestionSet {
        let mut set = SuggestionSet::default();

        for term in self.names.iter().chain(&self.phrases) {
            if contains_normalized(&term.normalized, query) {
                set.insert(term);
            }
        }
        for term in &self.keywords {
            if overlaps_normalized(&term.normalized, query) {
                set.insert(term);
            }
        }
        if set.len() < limit {
            for term in &self.popular {
                if contains_normalized(&term.normalized, query) {
                    set.insert(term);
                }
            }
        }

        set
    }

    /// Category keys with a keyword in a substring relation to `query`.
    pub fn related_categories(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        self.categories
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| overlaps_normalized(k, query)))
            .map(|(category, _)| category.clone())
            .collect()
    }
}

/// Insertion-ordered suggestion candidates, deduplicated by normalized text.
///
/// The first spelling seen wins; later duplicates are dropped.
#[derive(Debug, Default)]
pub(crate) struct SuggestionSet {
    seen: HashSet<String>,
    items: Vec<(String, SuggestionKey)>,
}

impl SuggestionSet {
    pub fn insert(&mut self, term: &Term) -> bool {
        if !self.seen.insert(term.normalized.clone()) {
            return false;
        }
        self.items
            .push((term.display.clone(), SuggestionKey::new(&term.display, term.normalized.clone())));
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Rank (prefix first, then shorter) and cut to `limit`.
    pub fn into_ranked(mut self, query: &str, limit: usize) -> Vec<String> {
        // sort_by is stable: equal keys keep source order
        self.items.sort_by(|a, b| compare_suggestions(query, &a.1, &b.1));
        self.items.into_iter().take(limit).map(|(display, _)| display).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_product;

    fn source(products: Vec<crate::types::Product>) -> SuggestionSource {
        let catalog = Catalog::new(products).unwrap();
        SuggestionSource::build(&catalog, &SearchConfig::default())
    }

    #[test]
    fn test_set_dedups_case_insensitively() {
        let mut set = SuggestionSet::default();
        assert!(set.insert(&Term::new("Lavanda").unwrap()));
        assert!(!set.insert(&Term::new("lavanda").unwrap()));
        assert!(!set.insert(&Term::new("  LAVANDA ").unwrap()));
        assert_eq!(set.len(), 1);
        assert_eq!(set.into_ranked("lav", 10), vec!["Lavanda"]);
    }

    #[test]
    fn test_blank_terms_skipped() {
        assert!(Term::new("   ").is_none());
    }

    #[test]
    fn test_names_before_phrases_on_ties() {
        let mut product = make_product("Calma", "blends");
        product.tags = vec!["Calmo".to_string()];
        let ranked = source(vec![product]).candidates("calm", 10).into_ranked("calm", 10);
        // Both prefix, both 5 chars: name first, then tag, then the "calming" keyword
        assert_eq!(ranked, vec!["Calma", "Calmo", "calming"]);
    }

    #[test]
    fn test_keywords_match_either_direction() {
        let src = source(vec![]);
        let ranked = src.candidates("lavender oil", 10).into_ranked("lavender oil", 10);
        assert_eq!(ranked, vec!["lavender"]);
        assert_eq!(src.related_categories("lavender oil"), vec!["single-oils"]);
    }

    #[test]
    fn test_popular_terms_only_pad_short_lists() {
        let src = source(vec![make_product("Wild Orange Soap", "skincare")]);
        // Name matched, list still short: popular "Wild Orange" is added
        let set = src.candidates("orange", 8);
        assert_eq!(set.len(), 2);
        // With a limit of 1 the list is already full
        assert_eq!(src.candidates("orange", 1).len(), 1);
    }

    #[test]
    fn test_no_related_categories_for_empty_query() {
        assert!(source(vec![]).related_categories("").is_empty());
    }
}
