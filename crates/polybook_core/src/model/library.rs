//! In-memory library value and its accessors.
//!
//! # Responsibility
//! - Hold categories, articles, per-language locale entries and the
//!   known-language list as one explicit value.
//! - Provide lookups, substring filters and lazy locale-entry access.
//!
//! # Invariants
//! - `languages` is in discovery order; the first element is the default
//!   language. The order is backend-specific and not canonical.
//! - `locale_entry` is idempotent: repeated calls for the same pair hand
//!   back the same entry, never a fresh default.

use crate::model::article::Article;
use crate::model::category::Category;
use crate::model::locale::LocaleEntry;
use std::collections::BTreeMap;

/// Per-language entry maps, keyed by language code then article id.
pub type LocaleMap = BTreeMap<String, BTreeMap<String, LocaleEntry>>;

/// The whole content library as one in-memory value.
///
/// Fields are public: the driving layer edits text content in place.
/// Structural changes must go through `service::mutate` so cascades and
/// preconditions are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    pub categories: Vec<Category>,
    pub articles: Vec<Article>,
    pub locales: LocaleMap,
    pub languages: Vec<String>,
}

impl Library {
    /// Creates an empty library with no known languages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty library with the given known-language list.
    pub fn with_languages(languages: Vec<String>) -> Self {
        Self {
            languages,
            ..Self::default()
        }
    }

    /// Returns the default language (the first discovered one).
    pub fn default_language(&self) -> Option<&str> {
        self.languages.first().map(String::as_str)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories
            .iter_mut()
            .find(|category| category.id == id)
    }

    pub fn article(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn article_mut(&mut self, id: &str) -> Option<&mut Article> {
        self.articles.iter_mut().find(|article| article.id == id)
    }

    /// Iterates the articles belonging to one category, in library order.
    pub fn articles_in<'a>(
        &'a self,
        category_id: &'a str,
    ) -> impl Iterator<Item = &'a Article> + 'a {
        self.articles
            .iter()
            .filter(move |article| article.category_id == category_id)
    }

    /// Case-insensitive substring filter over categories, matching the id
    /// or any language's name. A blank query matches everything.
    pub fn filter_categories(&self, query: &str) -> Vec<&Category> {
        let needle = query.trim().to_lowercase();
        self.categories
            .iter()
            .filter(|category| {
                needle.is_empty()
                    || category.id.to_lowercase().contains(&needle)
                    || category
                        .names
                        .values()
                        .any(|name| name.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Case-insensitive substring filter over articles, matching the id,
    /// optionally scoped to one category.
    pub fn filter_articles(&self, query: &str, category_id: Option<&str>) -> Vec<&Article> {
        let needle = query.trim().to_lowercase();
        self.articles
            .iter()
            .filter(|article| {
                if let Some(scope) = category_id {
                    if article.category_id != scope {
                        return false;
                    }
                }
                needle.is_empty() || article.id.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Returns the locale entry for `(language, article_id)`, creating an
    /// empty one on first access.
    pub fn locale_entry(&mut self, language: &str, article_id: &str) -> &mut LocaleEntry {
        self.locales
            .entry(language.to_string())
            .or_default()
            .entry(article_id.to_string())
            .or_insert_with(LocaleEntry::empty)
    }

    /// Non-creating entry lookup.
    pub fn peek_locale_entry(&self, language: &str, article_id: &str) -> Option<&LocaleEntry> {
        self.locales.get(language)?.get(article_id)
    }

    /// Ensures an entry exists for `article_id` under every known
    /// language, without touching entries that already exist.
    pub fn ensure_locale_entries(&mut self, article_id: &str) {
        let languages = self.languages.clone();
        for language in &languages {
            self.locale_entry(language, article_id);
        }
    }

    /// Removes every language's entry for `article_id`.
    pub fn remove_locale_entries(&mut self, article_id: &str) {
        for entries in self.locales.values_mut() {
            entries.remove(article_id);
        }
    }
}
