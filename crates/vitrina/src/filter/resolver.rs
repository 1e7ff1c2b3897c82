//! Resolves decoded filter pairs against a rubric's attribute/option trees.
//!
//! Output order is canonical: attributes in declared group/attribute order,
//! pairs in input order within one attribute. The original input position
//! of every pair is preserved separately, because head-noun selection in
//! the title composer depends on *selection* order while everything else
//! depends on *declaration* order.

use std::collections::HashSet;

use crate::filter::segment::FilterPair;
use crate::filter::warning::{FilterWarning, compute_suggestions};
use crate::types::{Attribute, AttributesGroup, FilterOption};

/// One resolved (attribute, option) selection borrowed from the taxonomy.
#[derive(Debug, Clone)]
pub struct ResolvedSelection<'a> {
    pub attribute: &'a Attribute,
    pub option: &'a FilterOption,
    /// Chain from the tree root down to the matched node's parent.
    pub ancestors: Vec<&'a FilterOption>,
    /// Flattened subtree below the matched node, in tree order. Selecting
    /// a parent option widens the query to its descendants.
    pub descendants: Vec<&'a FilterOption>,
    /// Position of the originating pair in the decoded segment list.
    pub input_index: usize,
}

/// Result of resolving all pairs: matched selections plus the warnings for
/// every pair that had to be dropped.
#[derive(Debug, Default)]
pub struct ResolvedFilters<'a> {
    pub selections: Vec<ResolvedSelection<'a>>,
    pub warnings: Vec<FilterWarning>,
}

/// Resolve decoded pairs against the attribute groups.
///
/// Pairs naming an unknown attribute or option are dropped with a warning
/// carrying "did you mean" suggestions. Duplicate pairs resolve once,
/// keeping the first occurrence's input position.
pub fn resolve_filters<'a>(
    groups: &'a [AttributesGroup],
    pairs: &[FilterPair],
) -> ResolvedFilters<'a> {
    let mut resolved = ResolvedFilters::default();
    let attribute_slugs: Vec<&str> = groups
        .iter()
        .flat_map(|group| group.attributes.iter())
        .map(|attribute| attribute.slug.as_str())
        .collect();

    // Warn about unknown attributes in input order; matching pairs are
    // handled below in canonical order.
    for pair in pairs {
        if !attribute_slugs.contains(&pair.attribute_slug.as_str()) {
            resolved.warnings.push(FilterWarning::UnknownAttribute {
                slug: pair.attribute_slug.clone(),
                suggestions: compute_suggestions(&pair.attribute_slug, attribute_slugs.clone()),
            });
        }
    }

    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    for group in groups {
        for attribute in &group.attributes {
            for (input_index, pair) in pairs.iter().enumerate() {
                if pair.attribute_slug != attribute.slug {
                    continue;
                }
                if !seen.insert((attribute.slug.as_str(), pair.option_slug.as_str())) {
                    continue;
                }
                match find_option(&attribute.options, &pair.option_slug) {
                    Some((option, ancestors)) => {
                        resolved.selections.push(ResolvedSelection {
                            attribute,
                            option,
                            ancestors,
                            descendants: flatten_tree(&option.children),
                            input_index,
                        });
                    }
                    None => {
                        let known: Vec<&str> = flatten_tree(&attribute.options)
                            .into_iter()
                            .map(|option| option.slug.as_str())
                            .collect();
                        resolved.warnings.push(FilterWarning::UnknownOption {
                            attribute_slug: attribute.slug.clone(),
                            slug: pair.option_slug.clone(),
                            suggestions: compute_suggestions(&pair.option_slug, known),
                        });
                    }
                }
            }
        }
    }

    resolved
}

/// Depth-first search over an option tree with an explicit stack.
///
/// Admin-entered parent/child links make language-level recursion on these
/// trees a liability; the taxonomy loader rejects cycles, and this search
/// stays iterative regardless.
fn find_option<'a>(
    roots: &'a [FilterOption],
    slug: &str,
) -> Option<(&'a FilterOption, Vec<&'a FilterOption>)> {
    let mut stack: Vec<(&FilterOption, Vec<&FilterOption>)> =
        roots.iter().rev().map(|option| (option, Vec::new())).collect();

    while let Some((node, ancestors)) = stack.pop() {
        if node.slug == slug {
            return Some((node, ancestors));
        }
        let mut chain = ancestors;
        chain.push(node);
        for child in node.children.iter().rev() {
            stack.push((child, chain.clone()));
        }
    }

    None
}

/// Flatten a subtree (excluding the roots' parents) in preorder.
pub(crate) fn flatten_tree(roots: &[FilterOption]) -> Vec<&FilterOption> {
    let mut out = Vec::new();
    let mut stack: Vec<&FilterOption> = roots.iter().rev().collect();
    while let Some(node) = stack.pop() {
        out.push(node);
        for child in node.children.iter().rev() {
            stack.push(child);
        }
    }
    out
}
