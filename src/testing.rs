//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::search::ProductIndex;
use crate::types::{Product, ProductId};
use crate::utils::slugify;
use std::sync::Arc;

/// Create a product with just a name, category and derived id.
///
/// This is the canonical implementation used across all tests.
pub fn make_product(name: &str, category: &str) -> Product {
    Product {
        id: ProductId(slugify(name)),
        name: name.to_string(),
        category: category.to_string(),
        ..Default::default()
    }
}

/// Create a product with every searchable field filled in.
pub fn make_full_product(
    name: &str,
    english_name: &str,
    category: &str,
    collections: &[&str],
    tags: &[&str],
    benefits: &[&str],
    description: &str,
) -> Product {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    Product {
        english_name: Some(english_name.to_string()),
        collections: owned(collections),
        tags: owned(tags),
        main_benefits: owned(benefits),
        description: description.to_string(),
        ..make_product(name, category)
    }
}

/// A small but realistic catalog: Spanish shop names, English names, a few
/// blends, and one bare product with nothing but a name.
pub fn sample_products() -> Vec<Product> {
    vec![
        make_full_product(
            "Lavanda",
            "Lavender",
            "single-oils",
            &["essentials", "sleep"],
            &["relax", "floral"],
            &["Promotes restful sleep", "Soothes occasional skin irritation"],
            "Steam-distilled from lavender flowers. A calming classic.",
        ),
        make_full_product(
            "Menta",
            "Peppermint",
            "single-oils",
            &["essentials"],
            &["fresh", "cooling"],
            &["Supports clear breathing", "Eases tension"],
            "Cooling and invigorating mint oil.",
        ),
        make_full_product(
            "Limón",
            "Lemon",
            "single-oils",
            &["citrus"],
            &["citrus", "cleaning"],
            &["Uplifting aroma", "Natural cleanser"],
            "Cold-pressed from lemon rinds.",
        ),
        make_full_product(
            "Incienso",
            "Frankincense",
            "single-oils",
            &["essentials"],
            &["grounding"],
            &["Promotes healthy-looking skin"],
            "Resin oil prized for meditation.",
        ),
        Product {
            english_name: Some("Tea Tree".to_string()),
            tags: vec!["purifying".to_string()],
            main_benefits: vec!["Cleansing for skin".to_string()],
            description: "Known as melaleuca. Purifying and rejuvenating.".to_string(),
            ..make_product("Árbol de Té", "single-oils")
        },
        make_full_product(
            "Mezcla Calmante",
            "Serenity Blend",
            "blends",
            &["sleep"],
            &["relax", "calming"],
            &["Promotes restful sleep"],
            "A restful blend of lavender, cedarwood and vanilla bean.",
        ),
        make_full_product(
            "Mezcla Respiratoria",
            "Breathe Blend",
            "blends",
            &["seasonal"],
            &["respiratory"],
            &["Supports clear airways"],
            "Eucalyptus, peppermint and cardamom.",
        ),
        make_full_product(
            "Aceite de Coco Fraccionado",
            "Fractionated Coconut Oil",
            "carrier-oils",
            &[],
            &["carrier"],
            &["Dilutes essential oils"],
            "Odorless carrier oil for topical use.",
        ),
        make_full_product(
            "Difusor Petal",
            "Petal Diffuser",
            "accessories",
            &[],
            &["diffuser"],
            &["Ultrasonic mist for up to 12 hours"],
            "Compact ultrasonic diffuser with LED light.",
        ),
        make_product("Crema Hidratante de Lavanda", "skincare"),
    ]
}

pub fn sample_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::new(sample_products()).expect("sample catalog is valid"))
}

/// The sample catalog indexed with default configuration.
pub fn sample_index() -> ProductIndex {
    ProductIndex::new(sample_catalog(), SearchConfig::default()).expect("default config is valid")
}
