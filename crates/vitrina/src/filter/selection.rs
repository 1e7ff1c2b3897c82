//! Request-scoped selection state and the checkbox render trees.
//!
//! `SelectedFilterState` is constructed fresh per request from the resolved
//! pairs and discarded with the response; nothing here is cached or shared.

use serde::Serialize;

use crate::context::RenderContext;
use crate::filter::resolver::ResolvedSelection;
use crate::filter::segment::join_segment;
use crate::filter::warning::{FilterWarning, display_name};
use crate::types::{Attribute, AttributeKind, AttributesGroup, FilterOption};

/// One selected option together with its URL bookkeeping.
#[derive(Debug, Clone)]
pub struct SelectedOption<'a> {
    pub option: &'a FilterOption,
    /// Position in the decoded segment list (selection order).
    pub input_index: usize,
    /// The segment re-encoding this selection.
    pub segment: String,
    /// Current segments with this option's segment removed.
    pub clear_segments: Vec<String>,
    /// Flattened subtree below the option, for query widening.
    pub descendants: Vec<&'a FilterOption>,
}

/// All selected options of one attribute, in selection order.
#[derive(Debug, Clone)]
pub struct SelectedAttribute<'a> {
    pub attribute: &'a Attribute,
    pub options: Vec<SelectedOption<'a>>,
    /// Current segments with all of this attribute's segments removed.
    pub clear_segments: Vec<String>,
    /// Greatest input index among this attribute's selections; the head
    /// recency tie-break.
    pub latest_input_index: usize,
}

/// The per-request selection state every downstream component consumes.
#[derive(Debug, Clone, Default)]
pub struct SelectedFilterState<'a> {
    /// Selected attributes in declaration order.
    pub attributes: Vec<SelectedAttribute<'a>>,
    /// Slug of the attribute currently supplying the title's head noun:
    /// the most recently selected head-candidate attribute that still has
    /// a selection, or `None`.
    pub head_attribute_slug: Option<String>,
    /// The normalized current path: resolved pairs re-encoded in selection
    /// order, duplicates removed.
    pub segments: Vec<String>,
}

impl<'a> SelectedFilterState<'a> {
    /// Group resolved selections by attribute and compute head status and
    /// clear paths.
    ///
    /// `selections` must be in the resolver's canonical order (attribute
    /// declaration order, input order within an attribute).
    pub fn build(selections: Vec<ResolvedSelection<'a>>) -> Self {
        let mut ordered: Vec<(usize, String)> = selections
            .iter()
            .map(|sel| {
                (
                    sel.input_index,
                    join_segment(&sel.attribute.slug, &sel.option.slug),
                )
            })
            .collect();
        ordered.sort_by_key(|(input_index, _)| *input_index);
        let segments: Vec<String> = ordered.into_iter().map(|(_, segment)| segment).collect();

        let mut attributes: Vec<SelectedAttribute<'a>> = Vec::new();
        for sel in selections {
            let segment = join_segment(&sel.attribute.slug, &sel.option.slug);
            let selected = SelectedOption {
                option: sel.option,
                input_index: sel.input_index,
                clear_segments: without(&segments, &segment),
                segment,
                descendants: sel.descendants,
            };
            if let Some(last) = attributes.last_mut()
                && last.attribute.slug == sel.attribute.slug
            {
                last.latest_input_index = last.latest_input_index.max(sel.input_index);
                last.options.push(selected);
            } else {
                attributes.push(SelectedAttribute {
                    attribute: sel.attribute,
                    options: vec![selected],
                    clear_segments: Vec::new(),
                    latest_input_index: sel.input_index,
                });
            }
        }

        for attribute in &mut attributes {
            attribute.clear_segments = segments
                .iter()
                .filter(|segment| {
                    !attribute
                        .options
                        .iter()
                        .any(|selected| &selected.segment == *segment)
                })
                .cloned()
                .collect();
        }

        let head_attribute_slug = attributes
            .iter()
            .filter(|attribute| {
                attribute.attribute.is_head_candidate && !attribute.options.is_empty()
            })
            .max_by_key(|attribute| attribute.latest_input_index)
            .map(|attribute| attribute.attribute.slug.clone());

        Self {
            attributes,
            head_attribute_slug,
            segments,
        }
    }

    /// True when nothing resolved; downstream behaves as "no filters".
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// The selected attribute currently holding head status.
    pub fn head_attribute(&self) -> Option<&SelectedAttribute<'a>> {
        let slug = self.head_attribute_slug.as_deref()?;
        self.attributes
            .iter()
            .find(|attribute| attribute.attribute.slug == slug)
    }

    /// The path that clears every filter.
    pub fn clear_all(&self) -> Vec<String> {
        Vec::new()
    }

    /// Build the checkbox render tree for every attribute of the rubric,
    /// selected or not. Missing translations surface the sentinel and are
    /// recorded in `warnings`.
    pub fn filter_views(
        &self,
        groups: &[AttributesGroup],
        ctx: &RenderContext,
        warnings: &mut Vec<FilterWarning>,
    ) -> Vec<AttributeFilterView> {
        groups
            .iter()
            .flat_map(|group| group.attributes.iter())
            .map(|attribute| {
                let clear_segments = self
                    .attributes
                    .iter()
                    .find(|selected| selected.attribute.slug == attribute.slug)
                    .map(|selected| selected.clear_segments.clone())
                    .unwrap_or_else(|| self.segments.clone());

                AttributeFilterView {
                    slug: attribute.slug.clone(),
                    name: display_name(&attribute.name, &attribute.slug, ctx, warnings),
                    kind: attribute.kind,
                    is_head_candidate: attribute.is_head_candidate,
                    clear_segments,
                    options: attribute
                        .options
                        .iter()
                        .map(|option| self.option_view(attribute, option, ctx, warnings))
                        .collect(),
                }
            })
            .collect()
    }

    fn option_view(
        &self,
        attribute: &Attribute,
        option: &FilterOption,
        ctx: &RenderContext,
        warnings: &mut Vec<FilterWarning>,
    ) -> OptionFilterView {
        let segment = join_segment(&attribute.slug, &option.slug);
        let is_selected = self.segments.contains(&segment);
        let toggle_segments = if is_selected {
            without(&self.segments, &segment)
        } else {
            let mut extended = self.segments.clone();
            extended.push(segment);
            extended
        };

        OptionFilterView {
            slug: option.slug.clone(),
            name: display_name(&option.name, &option.slug, ctx, warnings),
            is_selected,
            toggle_segments,
            children: option
                .children
                .iter()
                .map(|child| self.option_view(attribute, child, ctx, warnings))
                .collect(),
        }
    }
}

/// Render data for one attribute's filter control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeFilterView {
    pub slug: String,
    pub name: String,
    pub kind: AttributeKind,
    pub is_head_candidate: bool,
    /// Path clearing all of this attribute's selections.
    pub clear_segments: Vec<String>,
    pub options: Vec<OptionFilterView>,
}

/// Render data for one checkbox in an attribute's option tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionFilterView {
    pub slug: String,
    pub name: String,
    pub is_selected: bool,
    /// Path with this option's segment removed when selected, appended
    /// when not: the checkbox toggle target.
    pub toggle_segments: Vec<String>,
    pub children: Vec<OptionFilterView>,
}

fn without(segments: &[String], segment: &str) -> Vec<String> {
    segments
        .iter()
        .filter(|candidate| candidate.as_str() != segment)
        .cloned()
        .collect()
}
