use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::types::gender::{Gender, GenderVariants};
use crate::types::i18n::TranslationMap;

/// One node of an attribute's option tree.
///
/// Options nest (e.g. region → sub-region). Every node carries a globally
/// unique plain slug; hierarchy lives in the `children` structure, not in
/// the slug. Taxonomy loading rejects cyclic parent/child edges, so trees
/// reaching this engine are acyclic.
///
/// Named `FilterOption` to keep clear of `std::option::Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct FilterOption {
    pub slug: String,

    pub name: TranslationMap,

    /// Gender this option carries when it is itself the head noun of the
    /// composed title (e.g. "портвейн" is masculine).
    pub gender: Gender,

    /// Gender-agreeing forms per locale, present on adjective-like options
    /// (e.g. a color). Empty for pure-noun options.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    #[builder(default)]
    pub variants: BTreeMap<String, GenderVariants>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub children: Vec<FilterOption>,
}

impl FilterOption {
    /// The form of this option agreeing with `gender`, following the
    /// context's locale fallback (request locale, then default locale).
    pub fn variant_for(&self, ctx: &RenderContext, gender: Gender) -> Option<&str> {
        self.variants
            .get(ctx.locale())
            .and_then(|forms| forms.get(gender))
            .or_else(|| {
                self.variants
                    .get(ctx.default_locale())
                    .and_then(|forms| forms.get(gender))
            })
    }

    /// Whether this option carries any gender-agreeing form reachable from
    /// the context's locale chain.
    pub fn has_variants(&self, ctx: &RenderContext) -> bool {
        [ctx.locale(), ctx.default_locale()]
            .iter()
            .any(|locale| self.variants.get(*locale).is_some_and(|v| !v.is_empty()))
    }
}
