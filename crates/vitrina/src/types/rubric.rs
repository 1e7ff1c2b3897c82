use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::attribute::{Attribute, AttributesGroup};
use crate::types::gender::Gender;
use crate::types::i18n::TranslationMap;

/// A top-level catalogue taxonomy node (e.g. "wine").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct Rubric {
    pub slug: String,

    pub name: TranslationMap,

    /// Gender of the rubric's own name, used for modifier agreement when
    /// no head-candidate attribute is selected.
    pub gender: Gender,

    /// Title template with a fixed prefix and a single noun-phrase slot,
    /// e.g. `"Купить {catalogue}"`. `{{`/`}}` escape literal braces.
    pub title_template: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub attributes_groups: Vec<AttributesGroup>,
}

impl Rubric {
    /// All attributes in declared group/attribute order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes_groups
            .iter()
            .flat_map(|group| group.attributes.iter())
    }

    /// Find an attribute by slug across all groups.
    pub fn attribute(&self, slug: &str) -> Option<&Attribute> {
        self.attributes().find(|attribute| attribute.slug == slug)
    }
}
