//! Category domain model.
//!
//! # Responsibility
//! - Define the top-level content grouping with per-language metadata.
//!
//! # Invariants
//! - `id` is unique across all categories of one library.
//! - `names` and `descriptions` are keyed by language codes from the
//!   library's known-language list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level content grouping with an icon and per-language name/description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Author-chosen stable identifier, also the partition file stem.
    pub id: String,
    /// Icon reference shown next to the category. Must not be empty.
    #[serde(default)]
    pub icon: String,
    /// Display name per language code.
    #[serde(default)]
    pub names: BTreeMap<String, String>,
    /// Short description per language code. Validated to 4-5 words.
    #[serde(default)]
    pub descriptions: BTreeMap<String, String>,
}

impl Category {
    /// Creates a category with empty name/description slots for every
    /// known language, mirroring what an author sees right after "Add".
    pub fn empty(id: impl Into<String>, languages: &[String]) -> Self {
        let mut names = BTreeMap::new();
        let mut descriptions = BTreeMap::new();
        for language in languages {
            names.insert(language.clone(), String::new());
            descriptions.insert(language.clone(), String::new());
        }
        Self {
            id: id.into(),
            icon: String::new(),
            names,
            descriptions,
        }
    }

    /// Returns the display name for `language`, empty when unset.
    pub fn name(&self, language: &str) -> &str {
        self.names.get(language).map(String::as_str).unwrap_or("")
    }

    /// Returns the description for `language`, empty when unset.
    pub fn description(&self, language: &str) -> &str {
        self.descriptions
            .get(language)
            .map(String::as_str)
            .unwrap_or("")
    }
}
