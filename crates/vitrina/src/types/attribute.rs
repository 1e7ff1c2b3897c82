use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::i18n::TranslationMap;
use crate::types::option::FilterOption;

/// Input variant of an attribute's admin form and filter control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeKind {
    SelectSingle,
    #[default]
    SelectMultiple,
    Text,
    Number,
}

/// A filterable product attribute holding a tree of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct Attribute {
    pub slug: String,

    pub name: TranslationMap,

    #[serde(default)]
    #[builder(default)]
    pub kind: AttributeKind,

    /// Whether a selected option of this attribute may replace the rubric
    /// name as the title's head noun (e.g. "wine type"). Attributes without
    /// it are pure modifiers (e.g. "color").
    #[serde(default)]
    #[builder(default)]
    pub is_head_candidate: bool,

    /// Root list of the option tree.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub options: Vec<FilterOption>,
}

/// An ordered list of attributes scoped to a rubric or category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct AttributesGroup {
    pub name: TranslationMap,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub attributes: Vec<Attribute>,
}
