//! The read-only taxonomy data model.
//!
//! All entities here are loaded from the catalogue's persisted taxonomy at
//! request time and never mutated by this engine; admin CRUD owns their
//! lifecycle.

mod attribute;
mod gender;
mod i18n;
mod option;
mod rubric;

pub use attribute::{Attribute, AttributeKind, AttributesGroup};
pub use gender::{Gender, GenderVariants};
pub use i18n::{MISSING_TRANSLATION, TranslationMap};
pub use option::FilterOption;
pub use rubric::Rubric;
