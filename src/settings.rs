// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Which product fields the result cards show.
//!
//! Persisted settings outlive the code that wrote them. Older clients stored
//! camelCase keys, and the oldest stored a single `showPrices` toggle for both
//! prices. [`DisplaySettings::merge`] reads all of those shapes, starting from
//! defaults, and reports anything it had to ignore instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub show_price: bool,
    pub show_member_price: bool,
    pub show_english_name: bool,
    pub show_benefits: bool,
    pub show_tags: bool,
    pub show_collections: bool,
    pub show_description: bool,
    pub show_product_code: bool,
    pub show_image: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_price: true,
            show_member_price: true,
            show_english_name: true,
            show_benefits: true,
            show_tags: false,
            show_collections: false,
            show_description: true,
            show_product_code: false,
            show_image: true,
        }
    }
}

/// Something [`DisplaySettings::merge`] skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsWarning {
    /// The persisted value was not a JSON object at all.
    NotAnObject { found: &'static str },
    /// A known toggle held something other than a bool.
    NotABool { key: String, found: &'static str },
    /// A key no version of the settings ever had.
    UnknownKey { key: String },
}

impl fmt::Display for SettingsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsWarning::NotAnObject { found } => {
                write!(f, "display settings must be an object, found {}; using defaults", found)
            }
            SettingsWarning::NotABool { key, found } => {
                write!(f, "display setting `{}` must be a bool, found {}; keeping default", key, found)
            }
            SettingsWarning::UnknownKey { key } => write!(f, "unknown display setting `{}` ignored", key),
        }
    }
}

/// Legacy key that drives both price toggles.
const LEGACY_PRICES: [&str; 2] = ["showPrices", "show_prices"];

impl DisplaySettings {
    /// Defaults overlaid with whatever valid toggles `persisted` holds.
    pub fn merge(persisted: &Value) -> (DisplaySettings, Vec<SettingsWarning>) {
        let mut settings = DisplaySettings::default();
        let mut warnings = Vec::new();

        let Some(map) = persisted.as_object() else {
            warnings.push(SettingsWarning::NotAnObject {
                found: json_type(persisted),
            });
            log_warnings(&warnings);
            return (settings, warnings);
        };

        // Legacy combined toggle first, so explicit per-price keys win
        for key in LEGACY_PRICES {
            if let Some(value) = map.get(key) {
                match value.as_bool() {
                    Some(on) => {
                        settings.show_price = on;
                        settings.show_member_price = on;
                    }
                    None => warnings.push(not_a_bool(key, value)),
                }
            }
        }

        for (key, value) in map {
            if LEGACY_PRICES.contains(&key.as_str()) {
                continue;
            }
            let Some(slot) = settings.toggle_mut(key) else {
                warnings.push(SettingsWarning::UnknownKey { key: key.clone() });
                continue;
            };
            match value.as_bool() {
                Some(on) => *slot = on,
                None => warnings.push(not_a_bool(key, value)),
            }
        }

        log_warnings(&warnings);
        (settings, warnings)
    }

    /// The toggle named `key`, in current snake_case or legacy camelCase.
    fn toggle_mut(&mut self, key: &str) -> Option<&mut bool> {
        let slot = match key {
            "show_price" | "showPrice" => &mut self.show_price,
            "show_member_price" | "showMemberPrice" => &mut self.show_member_price,
            "show_english_name" | "showEnglishName" => &mut self.show_english_name,
            "show_benefits" | "showBenefits" => &mut self.show_benefits,
            "show_tags" | "showTags" => &mut self.show_tags,
            "show_collections" | "showCollections" => &mut self.show_collections,
            "show_description" | "showDescription" => &mut self.show_description,
            "show_product_code" | "showProductCode" => &mut self.show_product_code,
            "show_image" | "showImage" => &mut self.show_image,
            _ => return None,
        };
        Some(slot)
    }
}

fn not_a_bool(key: &str, value: &Value) -> SettingsWarning {
    SettingsWarning::NotABool {
        key: key.to_string(),
        found: json_type(value),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn log_warnings(warnings: &[SettingsWarning]) {
    for warning in warnings {
        tracing::warn!("{warning}");
    }
}
