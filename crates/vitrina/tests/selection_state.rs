//! Tests for the request-scoped selection state.

mod common;

use common::{ctx, noun_option, wine_rubric};
use vitrina::{
    Attribute, AttributesGroup, Gender, Rubric, SelectedFilterState, TranslationMap, decode,
    resolve_filters,
};

fn build_state<'a>(rubric: &'a Rubric, segments: &[&str]) -> SelectedFilterState<'a> {
    let (pairs, _) = decode(segments);
    let resolved = resolve_filters(&rubric.attributes_groups, &pairs);
    SelectedFilterState::build(resolved.selections)
}

/// Two head-candidate attributes, for recency tests.
fn two_heads_rubric() -> Rubric {
    Rubric::builder()
        .slug("napitki")
        .name(TranslationMap::of("ru", "напитки"))
        .gender(Gender::Masculine)
        .title_template("Купить {x}")
        .attributes_groups(vec![
            AttributesGroup::builder()
                .name(TranslationMap::of("ru", "Основные"))
                .attributes(vec![
                    Attribute::builder()
                        .slug("klass")
                        .name(TranslationMap::of("ru", "Класс"))
                        .is_head_candidate(true)
                        .options(vec![noun_option("vino", "вино", Gender::Neuter)])
                        .build(),
                    Attribute::builder()
                        .slug("tip")
                        .name(TranslationMap::of("ru", "Тип"))
                        .is_head_candidate(true)
                        .options(vec![noun_option("portvein", "портвейн", Gender::Masculine)])
                        .build(),
                ])
                .build(),
        ])
        .build()
}

// =========================================================================
// Grouping and segments
// =========================================================================

#[test]
fn groups_by_attribute_preserving_selection_order() {
    let rubric = wine_rubric();
    let state = build_state(&rubric, &["tsvet-krasnoe", "tip-portvein", "tsvet-beloe"]);

    assert_eq!(state.attributes.len(), 2);
    let tsvet = &state.attributes[0];
    assert_eq!(tsvet.attribute.slug, "tsvet");
    let option_order: Vec<&str> = tsvet
        .options
        .iter()
        .map(|o| o.option.slug.as_str())
        .collect();
    assert_eq!(option_order, vec!["krasnoe", "beloe"]);

    // Normalized segments keep the original selection order.
    assert_eq!(
        state.segments,
        vec!["tsvet-krasnoe", "tip-portvein", "tsvet-beloe"]
    );
}

#[test]
fn resolving_a_segment_twice_equals_resolving_it_once() {
    let rubric = wine_rubric();
    let once = build_state(&rubric, &["tsvet-beloe", "tip-portvein"]);
    let twice = build_state(&rubric, &["tsvet-beloe", "tip-portvein", "tsvet-beloe"]);

    assert_eq!(once.segments, twice.segments);
    assert_eq!(once.head_attribute_slug, twice.head_attribute_slug);
    assert_eq!(once.attributes.len(), twice.attributes.len());
    assert_eq!(once.attributes[0].options.len(), twice.attributes[0].options.len());
}

#[test]
fn empty_selection_behaves_as_no_filters() {
    let rubric = wine_rubric();
    let state = build_state(&rubric, &["marka-abrau"]);
    assert!(state.is_empty());
    assert!(state.segments.is_empty());
    assert_eq!(state.head_attribute_slug, None);
}

// =========================================================================
// Head recency
// =========================================================================

#[test]
fn most_recently_selected_head_candidate_wins() {
    let rubric = two_heads_rubric();

    let state = build_state(&rubric, &["klass-vino", "tip-portvein"]);
    assert_eq!(state.head_attribute_slug.as_deref(), Some("tip"));

    // Removing the later head selection demotes to the earlier one.
    let state = build_state(&rubric, &["klass-vino"]);
    assert_eq!(state.head_attribute_slug.as_deref(), Some("klass"));
}

#[test]
fn head_is_none_without_selected_head_candidates() {
    let rubric = wine_rubric();
    let state = build_state(&rubric, &["tsvet-beloe"]);
    assert_eq!(state.head_attribute_slug, None);
    assert!(state.head_attribute().is_none());
}

#[test]
fn modifier_attributes_never_take_head_status() {
    let rubric = wine_rubric();
    // "tsvet" is selected most recently but is not a head candidate.
    let state = build_state(&rubric, &["tip-portvein", "tsvet-beloe"]);
    assert_eq!(state.head_attribute_slug.as_deref(), Some("tip"));
}

// =========================================================================
// Clear paths
// =========================================================================

#[test]
fn clear_paths_remove_the_right_segments() {
    let rubric = wine_rubric();
    let state = build_state(&rubric, &["tsvet-beloe", "tsvet-krasnoe", "tip-portvein"]);

    let tsvet = &state.attributes[0];
    assert_eq!(tsvet.clear_segments, vec!["tip-portvein"]);

    let beloe = &tsvet.options[0];
    assert_eq!(beloe.clear_segments, vec!["tsvet-krasnoe", "tip-portvein"]);

    assert!(state.clear_all().is_empty());
}

// =========================================================================
// Render views
// =========================================================================

#[test]
fn views_cover_every_option_with_selected_flags_and_toggles() {
    let rubric = wine_rubric();
    let ctx = ctx();
    let state = build_state(&rubric, &["tsvet-beloe"]);

    let mut warnings = Vec::new();
    let views = state.filter_views(&rubric.attributes_groups, &ctx, &mut warnings);
    assert!(warnings.is_empty());
    assert_eq!(views.len(), 3);

    let tsvet = &views[0];
    assert_eq!(tsvet.name, "Цвет");
    let beloe = &tsvet.options[0];
    assert!(beloe.is_selected);
    assert!(beloe.toggle_segments.is_empty());
    let krasnoe = &tsvet.options[1];
    assert!(!krasnoe.is_selected);
    assert_eq!(krasnoe.toggle_segments, vec!["tsvet-beloe", "tsvet-krasnoe"]);

    // Nested options render as view children.
    let region = &views[2];
    assert_eq!(region.options[0].children.len(), 2);
    assert_eq!(region.options[0].children[0].slug, "bordo");
}

#[test]
fn missing_translation_surfaces_sentinel_and_warning() {
    let rubric = Rubric::builder()
        .slug("vino")
        .name(TranslationMap::of("ru", "вино"))
        .gender(Gender::Neuter)
        .title_template("Купить {x}")
        .attributes_groups(vec![
            AttributesGroup::builder()
                .name(TranslationMap::of("ru", "Основные"))
                .attributes(vec![
                    Attribute::builder()
                        .slug("tsvet")
                        .name(TranslationMap::new())
                        .build(),
                ])
                .build(),
        ])
        .build();
    let ctx = ctx();
    let state = build_state(&rubric, &[]);

    let mut warnings = Vec::new();
    let views = state.filter_views(&rubric.attributes_groups, &ctx, &mut warnings);
    assert!(TranslationMap::is_missing(&views[0].name));
    assert_eq!(warnings.len(), 1);
}
