//! Tests for document-store query descriptor construction.

mod common;

use common::wine_rubric;
use vitrina::query::CATALOGUE_PAGE_SIZE;
use vitrina::{
    PageArgs, Rubric, SelectedFilterState, SortBy, build_products_query, decode, resolve_filters,
};

fn query_for(rubric: &Rubric, segments: &[&str], args: PageArgs) -> vitrina::ProductsQuery {
    let (pairs, _) = decode(segments);
    let resolved = resolve_filters(&rubric.attributes_groups, &pairs);
    let state = SelectedFilterState::build(resolved.selections);
    build_products_query(rubric, &state, args)
}

// =========================================================================
// Match conditions
// =========================================================================

#[test]
fn or_within_attribute_and_across_attributes() {
    let rubric = wine_rubric();
    let query = query_for(
        &rubric,
        &["tsvet-beloe", "tsvet-krasnoe", "tip-portvein"],
        PageArgs::default(),
    );

    assert_eq!(query.rubric_slug, "vino");
    assert_eq!(query.conditions.len(), 2);
    assert_eq!(query.conditions[0].attribute_slug, "tsvet");
    assert_eq!(query.conditions[0].any_of, vec!["beloe", "krasnoe"]);
    assert_eq!(query.conditions[1].attribute_slug, "tip");
    assert_eq!(query.conditions[1].any_of, vec!["portvein"]);
}

#[test]
fn output_is_independent_of_segment_order() {
    let rubric = wine_rubric();
    let base = ["tsvet-beloe", "tsvet-krasnoe", "tip-portvein"];
    let permuted = ["tip-portvein", "tsvet-krasnoe", "tsvet-beloe"];

    assert_eq!(
        query_for(&rubric, &base, PageArgs::default()),
        query_for(&rubric, &permuted, PageArgs::default())
    );
}

#[test]
fn selecting_a_parent_option_widens_to_descendants() {
    let rubric = wine_rubric();
    let query = query_for(&rubric, &["region-francija"], PageArgs::default());

    assert_eq!(query.conditions.len(), 1);
    assert_eq!(
        query.conditions[0].any_of,
        vec!["bordo", "burgundija", "francija"]
    );
}

#[test]
fn empty_selection_means_no_conditions() {
    let rubric = wine_rubric();
    let query = query_for(&rubric, &["marka-abrau"], PageArgs::default());
    assert!(query.conditions.is_empty());
    assert!(query.facets.iter().all(|f| f.conditions.is_empty()));
}

// =========================================================================
// Pagination and sort
// =========================================================================

#[test]
fn pagination_uses_fixed_page_size() {
    let rubric = wine_rubric();
    let args = PageArgs {
        page: 3,
        sort: SortBy::PriceAsc,
    };
    let query = query_for(&rubric, &[], args);

    assert_eq!(query.page, 3);
    assert_eq!(query.skip, 2 * CATALOGUE_PAGE_SIZE);
    assert_eq!(query.limit, CATALOGUE_PAGE_SIZE);
    assert_eq!(query.sort, SortBy::PriceAsc);
}

#[test]
fn page_zero_is_clamped_to_first_page() {
    let rubric = wine_rubric();
    let args = PageArgs {
        page: 0,
        sort: SortBy::Priority,
    };
    let query = query_for(&rubric, &[], args);
    assert_eq!(query.page, 1);
    assert_eq!(query.skip, 0);
}

// =========================================================================
// Facets
// =========================================================================

#[test]
fn facets_lift_the_attributes_own_condition() {
    let rubric = wine_rubric();
    let query = query_for(
        &rubric,
        &["tsvet-beloe", "tip-portvein"],
        PageArgs::default(),
    );

    assert_eq!(query.facets.len(), 3);

    let tsvet = &query.facets[0];
    assert_eq!(tsvet.attribute_slug, "tsvet");
    assert_eq!(tsvet.options, vec!["beloe", "krasnoe"]);
    // Only the other attribute's condition restricts color counts.
    assert_eq!(tsvet.conditions.len(), 1);
    assert_eq!(tsvet.conditions[0].attribute_slug, "tip");

    let region = &query.facets[2];
    assert_eq!(region.options, vec!["francija", "bordo", "burgundija"]);
    assert_eq!(region.conditions.len(), 2);
}

#[test]
fn descriptor_serializes_for_the_store() {
    let rubric = wine_rubric();
    let query = query_for(&rubric, &["tsvet-beloe"], PageArgs::default());
    let value = serde_json::to_value(&query).unwrap();

    assert_eq!(value["sort"], "priority");
    assert_eq!(value["limit"], 36);
    assert_eq!(value["conditions"][0]["any_of"][0], "beloe");
}
