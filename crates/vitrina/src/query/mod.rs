//! Document-store query descriptor construction.
//!
//! The engine never talks to the store; it produces a typed descriptor the
//! storage collaborator executes. Within one attribute selected options
//! combine with OR (adding a second color widens the result set); across
//! attributes conditions combine with AND (adding a wine-type filter
//! narrows it).

use serde::Serialize;

use crate::filter::{SelectedFilterState, flatten_tree};
use crate::types::Rubric;

/// Fixed catalogue page size.
pub const CATALOGUE_PAGE_SIZE: u64 = 36;

/// Product list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    Priority,
    PriceAsc,
    PriceDesc,
    Newest,
}

/// Pagination and sort parameters of one catalogue request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageArgs {
    /// 1-based page number; 0 is clamped to 1.
    pub page: u32,
    pub sort: SortBy,
}

impl Default for PageArgs {
    fn default() -> Self {
        Self {
            page: 1,
            sort: SortBy::Priority,
        }
    }
}

/// Require a product to carry at least one of `any_of` for the attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchCondition {
    pub attribute_slug: String,
    /// Sorted, deduplicated option slugs; includes descendants of selected
    /// parent options.
    pub any_of: Vec<String>,
}

/// Per-option count request for one attribute, with that attribute's own
/// condition lifted so unavailable combinations can be greyed out without
/// hiding the attribute's other options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetRequest {
    pub attribute_slug: String,
    /// Every option slug of the attribute's tree, in tree order.
    pub options: Vec<String>,
    /// The AND-conditions of all other attributes.
    pub conditions: Vec<MatchCondition>,
}

/// The full query descriptor handed to the product store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductsQuery {
    pub rubric_slug: String,
    /// Conditions in attribute declaration order, combined with AND.
    pub conditions: Vec<MatchCondition>,
    pub skip: u64,
    pub limit: u64,
    pub page: u32,
    pub sort: SortBy,
    pub facets: Vec<FacetRequest>,
}

/// Translate the selection state into a query descriptor.
///
/// An empty selection produces no conditions and unrestricted facets,
/// identical to browsing without filters. The output is independent of the
/// original segment order.
pub fn build_products_query(
    rubric: &Rubric,
    state: &SelectedFilterState<'_>,
    args: PageArgs,
) -> ProductsQuery {
    let conditions: Vec<MatchCondition> = state
        .attributes
        .iter()
        .map(|selected| {
            let mut any_of: Vec<String> = Vec::new();
            for option in &selected.options {
                any_of.push(option.option.slug.clone());
                any_of.extend(option.descendants.iter().map(|node| node.slug.clone()));
            }
            any_of.sort();
            any_of.dedup();
            MatchCondition {
                attribute_slug: selected.attribute.slug.clone(),
                any_of,
            }
        })
        .collect();

    let facets: Vec<FacetRequest> = rubric
        .attributes()
        .filter(|attribute| !attribute.options.is_empty())
        .map(|attribute| FacetRequest {
            attribute_slug: attribute.slug.clone(),
            options: flatten_tree(&attribute.options)
                .into_iter()
                .map(|option| option.slug.clone())
                .collect(),
            conditions: conditions
                .iter()
                .filter(|condition| condition.attribute_slug != attribute.slug)
                .cloned()
                .collect(),
        })
        .collect();

    let page = args.page.max(1);
    ProductsQuery {
        rubric_slug: rubric.slug.clone(),
        conditions,
        skip: u64::from(page - 1) * CATALOGUE_PAGE_SIZE,
        limit: CATALOGUE_PAGE_SIZE,
        page,
        sort: args.sort,
        facets,
    }
}
