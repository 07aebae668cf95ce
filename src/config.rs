// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! [`SearchConfig::load`] layers an optional user TOML file over the embedded
//! defaults below, so a user file only needs the keys it changes:
//!
//! ```toml
//! [matching]
//! threshold = 0.4
//!
//! [limits]
//! search_default = 10
//! ```
//!
//! Tables merge key by key; arrays (popular terms, keyword lists) replace the
//! default array wholesale.

use crate::error::{Error, Result};
use crate::scoring::{FieldWeights, MatchParams};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

// =============================================================================
// EMBEDDED DEFAULTS
// =============================================================================

/// Suggestion lists never exceed this, whatever the configuration says.
pub const SUGGEST_HARD_CAP: usize = 20;

const DEFAULT_CONFIG: &str = r#"
popular_terms = [
    "Lavender",
    "Peppermint",
    "Frankincense",
    "Lemon",
    "Tea Tree",
    "Eucalyptus",
    "Wild Orange",
    "Oregano",
    "Diffuser",
    "Sleep",
]

[matching]
threshold     = 0.6
location      = 0
distance      = 100
corroboration = 0.05

[weights]
name          = 1.0
english_name  = 0.8
tags          = 0.6
main_benefits = 0.5
collections   = 0.4
description   = 0.2

[limits]
search_default  = 20
search_max      = 100
suggest_default = 8
suggest_max     = 20

[category_keywords]
single-oils = ["single oil", "essential oil", "pure oil", "lavender", "peppermint", "lemon", "tea tree", "frankincense"]
blends      = ["blend", "mix", "synergy", "calming", "respiratory", "sleep"]
skincare    = ["skin", "face", "lotion", "cream", "serum"]
supplements = ["supplement", "capsule", "softgel", "vitamin", "digestive"]
accessories = ["diffuser", "roller", "bottle", "accessory"]
kits        = ["kit", "collection", "starter", "bundle"]
"#;

// =============================================================================
// CONFIG TYPES
// =============================================================================

/// Result-count limits for both operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub search_default: usize,
    pub search_max: usize,
    pub suggest_default: usize,
    pub suggest_max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            search_default: 20,
            search_max: 100,
            suggest_default: 8,
            suggest_max: SUGGEST_HARD_CAP,
        }
    }
}

impl Limits {
    /// Effective search limit for a requested one.
    pub fn search(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.search_default).min(self.search_max)
    }

    /// Effective suggestion limit for a requested one.
    pub fn suggest(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.suggest_default)
            .min(self.suggest_max)
            .min(SUGGEST_HARD_CAP)
    }
}

/// Everything tunable about search and suggestions.
///
/// Missing fields fall back per field rather than through
/// [`SearchConfig::default`], which is itself deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub matching: MatchParams,
    #[serde(default)]
    pub weights: FieldWeights,
    #[serde(default)]
    pub limits: Limits,
    /// Shown for an empty suggestion query, and used to pad short lists.
    #[serde(default)]
    pub popular_terms: Vec<String>,
    /// Category key to the words that hint at it.
    #[serde(default)]
    pub category_keywords: BTreeMap<String, Vec<String>>,
}

/// The embedded defaults, parsed once.
static EMBEDDED: LazyLock<SearchConfig> = LazyLock::new(|| match SearchConfig::load(None) {
    Ok(config) => config,
    Err(e) => {
        tracing::error!(error = %e, "embedded search config is invalid, using bare defaults");
        SearchConfig {
            matching: MatchParams::default(),
            weights: FieldWeights::default(),
            limits: Limits::default(),
            popular_terms: Vec::new(),
            category_keywords: BTreeMap::new(),
        }
    }
});

impl Default for SearchConfig {
    /// The embedded TOML defaults, the same as `SearchConfig::load(None)`.
    fn default() -> Self {
        EMBEDDED.clone()
    }
}

impl SearchConfig {
    /// Load the embedded defaults, overlaid with `path` when given.
    ///
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "loading search config");
            builder = builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
        }
        Self::finish(builder)
    }

    /// Defaults overlaid with an in-memory TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));
        Self::finish(builder)
    }

    fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make scoring or limits meaningless.
    pub fn validate(&self) -> Result<()> {
        let m = &self.matching;
        if !m.threshold.is_finite() || m.threshold < 0.0 {
            return Err(invalid(format!("matching.threshold must be a non-negative number, got {}", m.threshold)));
        }
        if !m.corroboration.is_finite() || m.corroboration < 0.0 {
            return Err(invalid(format!(
                "matching.corroboration must be a non-negative number, got {}",
                m.corroboration
            )));
        }

        let w = &self.weights;
        for (key, value) in [
            ("name", w.name),
            ("english_name", w.english_name),
            ("tags", w.tags),
            ("main_benefits", w.main_benefits),
            ("collections", w.collections),
            ("description", w.description),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("weights.{key} must be a non-negative number, got {value}")));
            }
        }

        let l = &self.limits;
        if l.search_max == 0 || l.suggest_max == 0 {
            return Err(invalid("limits.search_max and limits.suggest_max must be at least 1".to_string()));
        }
        if l.suggest_max > SUGGEST_HARD_CAP {
            return Err(invalid(format!(
                "limits.suggest_max must be at most {SUGGEST_HARD_CAP}, got {}",
                l.suggest_max
            )));
        }
        if l.search_default > l.search_max {
            return Err(invalid(format!(
                "limits.search_default ({}) exceeds limits.search_max ({})",
                l.search_default, l.search_max
            )));
        }
        if l.suggest_default > l.suggest_max {
            return Err(invalid(format!(
                "limits.suggest_default ({}) exceeds limits.suggest_max ({})",
                l.suggest_default, l.suggest_max
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig(message)
}
