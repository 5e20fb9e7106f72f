//! Article domain model.
//!
//! # Responsibility
//! - Define the per-category content item and its language availability.
//!
//! # Invariants
//! - `id` is unique across all articles of one library (its own
//!   namespace, independent of category ids).
//! - `category_id` should reference an existing category; the validator
//!   reports the violation, the model does not enforce it.

use serde::{Deserialize, Serialize};

/// A content item belonging to one category, available in a subset of the
/// library's languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Author-chosen stable identifier, also the locale-entry key.
    pub id: String,
    /// Owning category id (foreign key).
    pub category_id: String,
    /// Marks content maintained by the curriculum team; informational,
    /// carried through persistence untouched.
    #[serde(default)]
    pub teacher_locked: bool,
    /// Languages this article is published in. Set semantics, serialized
    /// as an array in insertion order.
    #[serde(default)]
    pub available_languages: Vec<String>,
}

impl Article {
    /// Creates an article available in every given language.
    pub fn new(
        id: impl Into<String>,
        category_id: impl Into<String>,
        languages: &[String],
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            teacher_locked: false,
            available_languages: languages.to_vec(),
        }
    }

    /// Returns whether the article is published in `language`.
    pub fn is_available_in(&self, language: &str) -> bool {
        self.available_languages.iter().any(|lang| lang == language)
    }
}
