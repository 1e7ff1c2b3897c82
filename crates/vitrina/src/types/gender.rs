use serde::{Deserialize, Serialize};

/// Grammatical gender of a noun, and the agreement axis for modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// Gender-agreeing word forms of one option in one locale.
///
/// Attached to adjective-like options (e.g. a color) so the title composer
/// can re-decline them against the current head noun. Absent forms fall
/// back to the option's plain resolved name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderVariants {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masculine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feminine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neuter: Option<String>,
}

impl GenderVariants {
    /// The form agreeing with `gender`, if the taxonomy carries one.
    pub fn get(&self, gender: Gender) -> Option<&str> {
        let form = match gender {
            Gender::Masculine => &self.masculine,
            Gender::Feminine => &self.feminine,
            Gender::Neuter => &self.neuter,
        };
        form.as_deref()
    }

    /// True when no form is present for any gender.
    pub fn is_empty(&self) -> bool {
        self.masculine.is_none() && self.feminine.is_none() && self.neuter.is_none()
    }
}
