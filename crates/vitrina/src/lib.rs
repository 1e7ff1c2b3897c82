//! Multi-locale catalogue filter and title composition engine.
//!
//! Customers narrow a hierarchical product taxonomy (rubric → attribute
//! groups → attributes → option trees) via chained URL path segments. This
//! crate turns those segments into a document-store query descriptor, a
//! checkbox render tree, and a grammatically agreeing catalogue title:
//! adding a wine-type filter to "Купить белое вино" re-declines the color
//! modifiers against the new head noun, producing "Купить белый портвейн".
//!
//! The pipeline is pure and request-scoped: segments → [`filter::decode`] →
//! [`filter::resolve_filters`] → [`filter::SelectedFilterState`] →
//! {[`query::build_products_query`], [`title::compose_title`]}. Persistence
//! and page rendering are collaborators behind the traits in [`page`].
//!
//! Malformed or stale segments never fail a request; they are dropped and
//! reported as [`FilterWarning`] values for the embedding handler to log.

pub mod context;
pub mod filter;
pub mod page;
pub mod parser;
pub mod query;
pub mod title;
pub mod types;

pub use context::RenderContext;
pub use filter::{
    FilterPair, FilterWarning, ResolvedFilters, ResolvedSelection, SegmentError,
    SelectedFilterState, compute_suggestions, decode, encode, resolve_filters,
};
pub use page::{
    CataloguePage, PageError, ProductQueryExecutor, QueryResult, RubricSource, StoreError,
    build_catalogue_page,
};
pub use query::{PageArgs, ProductsQuery, SortBy, build_products_query};
pub use title::{TitleError, compose_title};
pub use types::{
    Attribute, AttributeKind, AttributesGroup, FilterOption, Gender, GenderVariants, Rubric,
    TranslationMap,
};
