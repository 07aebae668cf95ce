//! Relevance ordering: which product comes first, and why.

use super::common::{index_of, make_full_product, make_product, names, search, SAMPLE, SHOP};
use essentia::FieldKind;

#[test]
fn test_exact_name_ranks_first() {
    let response = search(&SAMPLE, "lavanda");
    let ranked = names(&response);
    assert_eq!(ranked[0], "Lavanda");
    assert_eq!(ranked[1], "Crema Hidratante de Lavanda");
    assert_eq!(response.results[0].matched_field, FieldKind::Name);
}

#[test]
fn test_typo_still_finds_product() {
    let response = search(&SAMPLE, "lavendr");
    assert_eq!(names(&response)[0], "Lavanda");
}

#[test]
fn test_english_name_search() {
    let response = search(&SAMPLE, "peppermint");
    assert_eq!(names(&response)[0], "Menta");
    assert_eq!(response.results[0].matched_field, FieldKind::EnglishName);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_accents_ignored() {
    assert_eq!(names(&search(&SAMPLE, "arbol de te"))[0], "Árbol de Té");
    assert_eq!(names(&search(&SAMPLE, "limon"))[0], "Limón");
    assert_eq!(names(&search(&SAMPLE, "LIMÓN"))[0], "Limón");
}

#[test]
fn test_scores_never_increase() {
    for query in ["lavanda", "oil", "blend", "sleep", "mezcla"] {
        let response = search(&SHOP, query);
        for pair in response.results.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "{query}: {} ({}) ranked above {} ({})",
                pair[0].product.name,
                pair[0].score,
                pair[1].product.name,
                pair[1].score
            );
        }
    }
}

#[test]
fn test_name_beats_tag_beats_description() {
    let mut in_description = make_product("Alpha", "blends");
    in_description.description = "smells of vetiver".to_string();
    let mut in_tags = make_product("Beta", "blends");
    in_tags.tags = vec!["vetiver".to_string()];
    let in_name = make_product("Vetiver", "single-oils");

    let index = index_of(vec![in_description, in_tags, in_name]);
    let response = search(&index, "vetiver");
    assert_eq!(names(&response), vec!["Vetiver", "Beta", "Alpha"]);
    assert_eq!(response.results[1].matched_field, FieldKind::Tags);
    assert_eq!(response.results[2].matched_field, FieldKind::Description);
}

#[test]
fn test_corroborating_fields_break_near_ties() {
    let plain = make_product("Rosa", "single-oils");
    let corroborated = make_full_product("Rosa Absoluta", "Rose", "single-oils", &[], &["rosa"], &[], "");

    let index = index_of(vec![plain, corroborated]);
    let response = search(&index, "rosa");
    // Both have "rosa" at the start of the name; the tag adds a little
    assert_eq!(names(&response), vec!["Rosa Absoluta", "Rosa"]);
    assert!(response.results[0].score > 1.0);
}

#[test]
fn test_match_position_matters() {
    let early = make_product("Cedro Atlas", "single-oils");
    let late = make_product("Mezcla de Bosque con Cedro", "blends");

    let index = index_of(vec![late, early]);
    assert_eq!(names(&search(&index, "cedro")), vec!["Cedro Atlas", "Mezcla de Bosque con Cedro"]);
}

#[test]
fn test_words_may_be_apart() {
    let response = search(&SHOP, "coconut oil");
    assert_eq!(names(&response)[0], "Aceite de Coco Fraccionado");
}
