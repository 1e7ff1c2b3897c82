//! Locale resolution for multi-language strings.
//!
//! Translation lookups never fail: catalogue URLs are bookmarked and shared,
//! so a hole in the taxonomy's translations degrades to a detectable
//! sentinel instead of erroring the request. The embedding handler treats a
//! surfaced sentinel as a data-integrity warning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::context::RenderContext;

/// Sentinel returned when neither the requested nor the default locale has
/// a translation. Detectable via [`TranslationMap::is_missing`].
pub const MISSING_TRANSLATION: &str = "{{translation missing}}";

/// A mapping from locale code to translated string.
///
/// Keys come from the site's fixed set of supported locales; no locale is
/// guaranteed present. Read-only to this engine.
///
/// # Example
///
/// ```
/// use vitrina::{RenderContext, TranslationMap};
///
/// let name = TranslationMap::of("ru", "вино").with("en", "wine");
/// let ctx = RenderContext::with_locale("en");
/// assert_eq!(name.resolve(&ctx), "wine");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationMap(BTreeMap<String, String>);

impl TranslationMap {
    /// An empty map; every lookup resolves to the sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map with a single initial translation.
    pub fn of(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new().with(locale, text)
    }

    /// Add a translation, consuming and returning the map.
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    /// Exact lookup without fallback.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Resolve the best string for the context's locale.
    ///
    /// Order: exact match, the configured default locale, then the
    /// [`MISSING_TRANSLATION`] sentinel. Never panics.
    pub fn resolve<'a>(&'a self, ctx: &RenderContext) -> &'a str {
        self.get(ctx.locale())
            .or_else(|| self.get(ctx.default_locale()))
            .unwrap_or(MISSING_TRANSLATION)
    }

    /// True when `text` is the "no translation found" sentinel.
    pub fn is_missing(text: &str) -> bool {
        text == MISSING_TRANSLATION
    }
}

impl FromIterator<(String, String)> for TranslationMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
