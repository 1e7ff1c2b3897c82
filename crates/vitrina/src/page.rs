//! End-to-end page assembly and the collaborator interfaces.
//!
//! This is the embedding-facing surface: the HTTP page handler supplies a
//! rubric slug, the raw filter segments, and the two storage collaborators,
//! and receives everything the rendering layer needs. A missing rubric is
//! the only request-fatal condition; every other degradation lands in
//! [`CataloguePage::warnings`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::RenderContext;
use crate::filter::{
    AttributeFilterView, FilterWarning, SelectedFilterState, decode, display_name, resolve_filters,
};
use crate::query::{PageArgs, ProductsQuery, build_products_query};
use crate::title::{TitleError, compose_title};
use crate::types::{Rubric, TranslationMap};

/// Failure reported by a storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("catalogue store failure: {message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Supplies rubric documents (with embedded attribute groups) by slug.
pub trait RubricSource {
    fn rubric_by_slug(&self, slug: &str) -> Result<Option<Rubric>, StoreError>;
}

/// In-memory source, the test double for the document store.
impl RubricSource for Vec<Rubric> {
    fn rubric_by_slug(&self, slug: &str) -> Result<Option<Rubric>, StoreError> {
        Ok(self.iter().find(|rubric| rubric.slug == slug).cloned())
    }
}

/// Executes a [`ProductsQuery`] against the product store.
pub trait ProductQueryExecutor {
    fn run(&self, query: &ProductsQuery) -> Result<QueryResult, StoreError>;
}

/// One product in the listing payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    pub slug: String,
    pub name: TranslationMap,
    /// Price in minor currency units.
    pub price: u64,
}

/// Per-option product count returned by the store for a facet request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub attribute_slug: String,
    pub option_slug: String,
    pub count: u64,
}

/// What the product store returns for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub products: Vec<ProductCard>,
    pub total_count: u64,
    pub facet_counts: Vec<FacetCount>,
}

/// One breadcrumb: the rubric, then each selected option cumulatively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    pub segments: Vec<String>,
}

/// Summary of one attribute's active selections for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedAttributeSummary {
    pub attribute_slug: String,
    pub attribute_name: String,
    pub option_slugs: Vec<String>,
    /// Path clearing this attribute's selections.
    pub clear_segments: Vec<String>,
}

/// Request-fatal page failures, mapped to a non-200 outcome upstream.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("rubric not found: '{slug}'")]
    RubricNotFound { slug: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Title(#[from] TitleError),
}

/// The full payload produced for the page-rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CataloguePage {
    pub title: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub filters: Vec<AttributeFilterView>,
    pub selected: Vec<SelectedAttributeSummary>,
    pub products: Vec<ProductCard>,
    pub total_count: u64,
    pub facet_counts: Vec<FacetCount>,
    /// The path that removes every filter.
    pub clear_all_path: Vec<String>,
    /// Degradation events for the embedding handler to log.
    pub warnings: Vec<FilterWarning>,
}

/// Build the catalogue page for one request.
///
/// Wires the whole pipeline: decode → resolve → selection state →
/// {query, title, views, breadcrumbs}. Unknown and malformed segments are
/// dropped; the page renders as if they were absent.
pub fn build_catalogue_page<S, E>(
    rubric_slug: &str,
    segments: &[String],
    args: PageArgs,
    ctx: &RenderContext,
    source: &S,
    executor: &E,
) -> Result<CataloguePage, PageError>
where
    S: RubricSource,
    E: ProductQueryExecutor,
{
    let rubric = source
        .rubric_by_slug(rubric_slug)?
        .ok_or_else(|| PageError::RubricNotFound {
            slug: rubric_slug.to_string(),
        })?;

    let (pairs, mut warnings) = decode(segments);
    let resolved = resolve_filters(&rubric.attributes_groups, &pairs);
    warnings.extend(resolved.warnings);
    let state = SelectedFilterState::build(resolved.selections);

    let query = build_products_query(&rubric, &state, args);
    let result = executor.run(&query)?;
    let title = compose_title(&rubric, &state, ctx)?;

    let filters = state.filter_views(&rubric.attributes_groups, ctx, &mut warnings);
    let breadcrumbs = breadcrumbs(&rubric, &state, ctx, &mut warnings);
    let selected = state
        .attributes
        .iter()
        .map(|attribute| SelectedAttributeSummary {
            attribute_slug: attribute.attribute.slug.clone(),
            attribute_name: display_name(
                &attribute.attribute.name,
                &attribute.attribute.slug,
                ctx,
                &mut warnings,
            ),
            option_slugs: attribute
                .options
                .iter()
                .map(|option| option.option.slug.clone())
                .collect(),
            clear_segments: attribute.clear_segments.clone(),
        })
        .collect();

    Ok(CataloguePage {
        title,
        breadcrumbs,
        filters,
        selected,
        products: result.products,
        total_count: result.total_count,
        facet_counts: result.facet_counts,
        clear_all_path: state.clear_all(),
        warnings,
    })
}

/// The rubric crumb, then one crumb per selected option in selection
/// order, each carrying the cumulative path up to that selection.
fn breadcrumbs(
    rubric: &Rubric,
    state: &SelectedFilterState<'_>,
    ctx: &RenderContext,
    warnings: &mut Vec<FilterWarning>,
) -> Vec<Breadcrumb> {
    let mut crumbs = vec![Breadcrumb {
        name: display_name(&rubric.name, &rubric.slug, ctx, warnings),
        segments: Vec::new(),
    }];

    let mut selections: Vec<_> = state
        .attributes
        .iter()
        .flat_map(|attribute| attribute.options.iter())
        .collect();
    selections.sort_by_key(|option| option.input_index);

    let mut path = Vec::new();
    for option in selections {
        path.push(option.segment.clone());
        crumbs.push(Breadcrumb {
            name: display_name(&option.option.name, &option.option.slug, ctx, warnings),
            segments: path.clone(),
        });
    }

    crumbs
}
