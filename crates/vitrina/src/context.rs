//! Per-request rendering context.
//!
//! The original system read the current locale from ambient configuration.
//! Here the locale and its localization tables travel as an explicit value
//! threaded through every component call, so the engine is testable without
//! process-wide setup.

use std::collections::BTreeMap;

use bon::Builder;

/// Built-in "or" connector words per locale.
fn builtin_connector(locale: &str) -> Option<&'static str> {
    match locale {
        "ru" => Some("или"),
        "en" => Some("or"),
        "uk" => Some("або"),
        "de" => Some("oder"),
        _ => None,
    }
}

/// Request-scoped locale settings for resolving names and composing titles.
///
/// # Example
///
/// ```
/// use vitrina::RenderContext;
///
/// let ctx = RenderContext::builder().locale("ru").build();
/// assert_eq!(ctx.locale(), "ru");
/// assert_eq!(ctx.or_connector(), "или");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct RenderContext {
    /// Locale requested for this render (e.g. "ru", "en").
    #[builder(default = "ru".to_string())]
    locale: String,

    /// Site-configured fallback locale used when the requested locale has
    /// no translation.
    #[builder(default = "ru".to_string())]
    default_locale: String,

    /// Per-locale overrides for the "or" connector word, taking precedence
    /// over the built-in table.
    #[builder(default)]
    connector_overrides: BTreeMap<String, String>,
}

impl Default for RenderContext {
    fn default() -> Self {
        RenderContext::builder().build()
    }
}

impl RenderContext {
    /// Create a context with default settings (Russian).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context for the given locale, keeping the default fallback.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        RenderContext::builder().locale(locale.into()).build()
    }

    /// The locale requested for this render.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The configured fallback locale.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// The localized "or" connector joining alternative options in titles.
    ///
    /// Resolution order: override for the request locale, built-in entry
    /// for the request locale, the same two steps for the default locale,
    /// then the literal `"or"`.
    pub fn or_connector(&self) -> &str {
        self.connector_for(&self.locale)
            .or_else(|| self.connector_for(&self.default_locale))
            .unwrap_or("or")
    }

    fn connector_for(&self, locale: &str) -> Option<&str> {
        self.connector_overrides
            .get(locale)
            .map(String::as_str)
            .or_else(|| builtin_connector(locale))
    }
}
