//! Non-fatal degradation events.
//!
//! Catalogue URLs are bookmarked and shared, so a stale or tampered link
//! must render as if the offending segment were absent. Each dropped
//! segment and each translation hole becomes a warning value the embedding
//! handler logs; the engine itself never writes to a logger.

use thiserror::Error;

use crate::context::RenderContext;
use crate::types::TranslationMap;

/// A graceful-degradation event collected while building a catalogue page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterWarning {
    /// Segment without a separator or with an empty slug half.
    #[error("malformed filter segment '{segment}' dropped")]
    MalformedSegment { segment: String },

    /// Segment naming an attribute slug absent from the rubric.
    #[error("unknown attribute '{slug}' dropped{}", render_suggestions(.suggestions))]
    UnknownAttribute {
        slug: String,
        suggestions: Vec<String>,
    },

    /// Segment naming an option slug absent from the attribute's tree.
    #[error("unknown option '{slug}' for attribute '{attribute_slug}' dropped{}", render_suggestions(.suggestions))]
    UnknownOption {
        attribute_slug: String,
        slug: String,
        suggestions: Vec<String>,
    },

    /// Neither the requested nor the default locale carries a translation.
    #[error("no '{locale}' translation for '{slug}'")]
    MissingTranslation { slug: String, locale: String },
}

fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for slugs <= 3 chars
/// - distance <= 2 for longer slugs
/// - limited to 3 suggestions, sorted by distance
pub fn compute_suggestions<'a, I>(slug: &str, available: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let max_distance = if slug.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .into_iter()
        .filter_map(|candidate| {
            let dist = strsim::levenshtein(slug, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}

/// Resolve a display name, recording a warning if even the default locale
/// is missing. The sentinel still flows to the output so the hole is
/// visible rather than silently blank.
pub(crate) fn display_name(
    name: &TranslationMap,
    slug: &str,
    ctx: &RenderContext,
    warnings: &mut Vec<FilterWarning>,
) -> String {
    let resolved = name.resolve(ctx);
    if TranslationMap::is_missing(resolved) {
        warnings.push(FilterWarning::MissingTranslation {
            slug: slug.to_string(),
            locale: ctx.locale().to_string(),
        });
    }
    resolved.to_string()
}
