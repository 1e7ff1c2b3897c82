//! URL filter segment codec.
//!
//! One path segment encodes one (attribute, option) selection as
//! `attribute-option`. The separator is a reserved character: slugs may not
//! contain it. Nested options carry their own plain slugs rather than
//! path-encoded ones, so splitting on the first separator occurrence always
//! recovers the original pair and round-trips losslessly.

use thiserror::Error;

use crate::filter::warning::FilterWarning;

/// Reserved character between the attribute and option halves of a segment.
pub const SEGMENT_SEPARATOR: char = '-';

/// Encode-side failure: the caller supplied a slug that cannot appear in a
/// segment. Decode never errors; it drops and warns instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    #[error("slug '{slug}' must be a non-empty token without '-'")]
    InvalidSlug { slug: String },
}

/// A decoded (attribute, option) selection, not yet resolved against the
/// taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPair {
    pub attribute_slug: String,
    pub option_slug: String,
}

/// Encode a selection into one URL path segment.
pub fn encode(attribute_slug: &str, option_slug: &str) -> Result<String, SegmentError> {
    validate_slug(attribute_slug)?;
    validate_slug(option_slug)?;
    Ok(join_segment(attribute_slug, option_slug))
}

/// Decode path segments into selection pairs.
///
/// Splits each segment on the first [`SEGMENT_SEPARATOR`] occurrence.
/// Malformed segments (no separator, empty half) are dropped with a
/// [`FilterWarning::MalformedSegment`]; browsing must keep working on
/// stale or tampered links.
pub fn decode<S: AsRef<str>>(segments: &[S]) -> (Vec<FilterPair>, Vec<FilterWarning>) {
    let mut pairs = Vec::with_capacity(segments.len());
    let mut warnings = Vec::new();

    for segment in segments {
        let segment = segment.as_ref();
        match segment.split_once(SEGMENT_SEPARATOR) {
            Some((attribute_slug, option_slug))
                if !attribute_slug.is_empty() && !option_slug.is_empty() =>
            {
                pairs.push(FilterPair {
                    attribute_slug: attribute_slug.to_string(),
                    option_slug: option_slug.to_string(),
                });
            }
            _ => warnings.push(FilterWarning::MalformedSegment {
                segment: segment.to_string(),
            }),
        }
    }

    (pairs, warnings)
}

/// Join two known-valid slugs. Used internally for segments rebuilt from
/// taxonomy entities, which the codec contract already constrains.
pub(crate) fn join_segment(attribute_slug: &str, option_slug: &str) -> String {
    format!("{attribute_slug}{SEGMENT_SEPARATOR}{option_slug}")
}

fn validate_slug(slug: &str) -> Result<(), SegmentError> {
    if slug.is_empty() || slug.contains(SEGMENT_SEPARATOR) {
        return Err(SegmentError::InvalidSlug {
            slug: slug.to_string(),
        });
    }
    Ok(())
}
