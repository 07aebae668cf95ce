// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Human-readable rendering of search, suggest and inspect output.

use super::display::*;
use essentia::{Catalog, SearchConfig, SearchResponse, SuggestResponse};

const NAME_WIDTH: usize = 34;
const CATEGORY_WIDTH: usize = 14;

pub fn print_search(query: &str, response: &SearchResponse<'_>) {
    title(&format!("search: {query}"));

    section_top("RESULTS");
    if response.results.is_empty() {
        row(&format!("  {}", themed(Color::Gray, &[], "no matching products")));
    }
    for (rank, hit) in response.results.iter().enumerate() {
        let product = hit.product;
        let name = themed(Color::BrightGreen, &[BOLD], &truncate(&product.name, NAME_WIDTH));
        let english = product
            .english_name
            .as_deref()
            .map(|e| themed(Color::Gray, &[DIM], &truncate(e, 20)))
            .unwrap_or_default();
        row(&format!(
            " {} {} {} {} {}",
            pad_left(&(rank + 1).to_string(), 3),
            score_value(hit.score),
            pad_right(&name, NAME_WIDTH),
            pad_right(&truncate(&product.category, CATEGORY_WIDTH), CATEGORY_WIDTH),
            field_label(hit.matched_field),
        ));
        if !english.is_empty() {
            row(&format!("           {english}"));
        }
    }

    if !response.suggestions.is_empty() {
        section_mid("SUGGESTIONS");
        row(&format!("  {}", truncate(&response.suggestions.join(", "), BOX_WIDTH - 4)));
    }

    section_mid("STATS");
    let s = response.stats;
    row(&format!(
        "  matched {}  filtered {}  returned {}",
        themed(Color::Yellow, &[], &s.matched.to_string()),
        themed(Color::Yellow, &[], &s.filtered.to_string()),
        themed(Color::Yellow, &[], &s.returned.to_string()),
    ));
    section_bot();
}

pub fn print_suggest(query: &str, response: &SuggestResponse) {
    let heading = if query.trim().is_empty() {
        "popular".to_string()
    } else {
        format!("suggest: {query}")
    };
    title(&heading);

    section_top("SUGGESTIONS");
    if response.suggestions.is_empty() {
        row(&format!("  {}", themed(Color::Gray, &[], "no suggestions")));
    }
    for suggestion in &response.suggestions {
        row(&format!("  {}", truncate(suggestion, BOX_WIDTH - 4)));
    }

    if !response.related_categories.is_empty() {
        section_mid("RELATED CATEGORIES");
        row(&format!("  {}", themed(Color::Magenta, &[], &response.related_categories.join(", "))));
    }

    section_mid("STATS");
    row(&format!(
        "  candidates {}  returned {}",
        themed(Color::Yellow, &[], &response.stats.candidates.to_string()),
        themed(Color::Yellow, &[], &response.stats.returned.to_string()),
    ));
    section_bot();
}

pub fn print_inspect(path: &str, catalog: &Catalog, config: &SearchConfig) {
    title(&truncate(path, BOX_WIDTH - 4));

    section_top("CATALOG");
    row(&format!("  products     {}", themed(Color::Yellow, &[BOLD], &catalog.len().to_string())));
    let unnamed_english = catalog.products().iter().filter(|p| p.english_name.is_none()).count();
    row(&format!("  no english   {}", themed(Color::Yellow, &[], &unnamed_english.to_string())));

    section_mid("CATEGORIES");
    print_counts(&catalog.categories());

    section_mid("COLLECTIONS");
    print_counts(&catalog.collections());

    section_mid("MATCHING");
    let m = config.matching;
    row(&format!(
        "  threshold {:.2}  location {}  distance {}  corroboration {:.2}",
        m.threshold, m.location, m.distance, m.corroboration
    ));
    section_bot();
}

fn print_counts(counts: &[(String, usize)]) {
    if counts.is_empty() {
        row(&format!("  {}", themed(Color::Gray, &[], "none")));
    }
    for (label, n) in counts {
        row(&format!(
            "  {} {}",
            pad_right(&truncate(label, 40), 40),
            pad_left(&themed(Color::Yellow, &[], &n.to_string()), 6)
        ));
    }
}
