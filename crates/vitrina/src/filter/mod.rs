//! The filter pipeline: URL path segments → decoded pairs → resolved
//! taxonomy selections → request-scoped selection state.
//!
//! Every stage degrades gracefully: malformed or stale segments are dropped
//! and reported as [`FilterWarning`] values, never as request failures.

mod resolver;
mod segment;
mod selection;
mod warning;

pub use resolver::{ResolvedFilters, ResolvedSelection, resolve_filters};
pub(crate) use resolver::flatten_tree;
pub use segment::{FilterPair, SEGMENT_SEPARATOR, SegmentError, decode, encode};
pub use selection::{
    AttributeFilterView, OptionFilterView, SelectedAttribute, SelectedFilterState, SelectedOption,
};
pub use warning::{FilterWarning, compute_suggestions};
pub(crate) use warning::display_name;
