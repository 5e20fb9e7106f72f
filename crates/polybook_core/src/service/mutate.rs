//! Cascade-safe structural mutations.
//!
//! # Responsibility
//! - Provide the only sanctioned create/rename/delete operations for
//!   categories and articles, plus language-set changes.
//! - Maintain referential integrity cascades on every call.
//!
//! # Invariants
//! - Fail-fast, all-or-nothing: every precondition is checked before the
//!   first mutation; on error the library is untouched.
//! - Renaming an article moves its locale entries (re-keys them); the old
//!   key is absent afterward.
//! - Shrinking an article's language set never deletes locale entries;
//!   stale entries for now-unavailable languages are retained.

use crate::model::article::Article;
use crate::model::category::Category;
use crate::model::library::Library;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MutateResult<T> = Result<T, MutateError>;

/// Precondition failure for a structural mutation. The library is
/// unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutateError {
    /// Category id is blank after trimming.
    BlankCategoryId,
    /// Article id is blank after trimming.
    BlankArticleId,
    /// Category id already in use.
    CategoryIdTaken(String),
    /// Article id already in use.
    ArticleIdTaken(String),
    /// No category with this id.
    CategoryNotFound(String),
    /// No article with this id.
    ArticleNotFound(String),
}

impl Display for MutateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankCategoryId => write!(f, "category id must not be blank"),
            Self::BlankArticleId => write!(f, "article id must not be blank"),
            Self::CategoryIdTaken(id) => write!(f, "category id already exists: {id}"),
            Self::ArticleIdTaken(id) => write!(f, "article id already exists: {id}"),
            Self::CategoryNotFound(id) => write!(f, "category not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
        }
    }
}

impl Error for MutateError {}

/// Creates a category with empty metadata slots for every known language.
pub fn create_category(library: &mut Library, id: &str) -> MutateResult<()> {
    let id = non_blank_category_id(id)?;
    if library.category(id).is_some() {
        return Err(MutateError::CategoryIdTaken(id.to_string()));
    }

    let category = Category::empty(id, &library.languages);
    library.categories.push(category);
    Ok(())
}

/// Renames a category and re-points every article referencing it.
///
/// Renaming a category to its current id is a no-op.
pub fn rename_category(library: &mut Library, old: &str, new: &str) -> MutateResult<()> {
    let new = non_blank_category_id(new)?;
    if new == old {
        return Ok(());
    }
    if library.category(old).is_none() {
        return Err(MutateError::CategoryNotFound(old.to_string()));
    }
    if library.category(new).is_some() {
        return Err(MutateError::CategoryIdTaken(new.to_string()));
    }

    for category in &mut library.categories {
        if category.id == old {
            category.id = new.to_string();
        }
    }
    for article in &mut library.articles {
        if article.category_id == old {
            article.category_id = new.to_string();
        }
    }
    Ok(())
}

/// Deletes a category, its articles and their locale entries under every
/// language. Returns the removed article ids.
pub fn delete_category(library: &mut Library, id: &str) -> MutateResult<Vec<String>> {
    if library.category(id).is_none() {
        return Err(MutateError::CategoryNotFound(id.to_string()));
    }

    library.categories.retain(|category| category.id != id);
    let removed: Vec<String> = library
        .articles
        .iter()
        .filter(|article| article.category_id == id)
        .map(|article| article.id.clone())
        .collect();
    library.articles.retain(|article| article.category_id != id);
    for article_id in &removed {
        library.remove_locale_entries(article_id);
    }
    Ok(removed)
}

/// Creates an article in `category_id`, available in every known
/// language, with locale entries ensured across all of them.
pub fn create_article(library: &mut Library, category_id: &str, id: &str) -> MutateResult<()> {
    if library.category(category_id).is_none() {
        return Err(MutateError::CategoryNotFound(category_id.to_string()));
    }
    let id = non_blank_article_id(id)?;
    if library.article(id).is_some() {
        return Err(MutateError::ArticleIdTaken(id.to_string()));
    }

    let article = Article::new(id, category_id, &library.languages);
    library.articles.push(article);
    library.ensure_locale_entries(id);
    Ok(())
}

/// Renames an article and moves (re-keys) its locale entry under every
/// language; the old key is absent afterward.
///
/// Renaming an article to its current id is a no-op.
pub fn rename_article(library: &mut Library, old: &str, new: &str) -> MutateResult<()> {
    let new = non_blank_article_id(new)?;
    if new == old {
        return Ok(());
    }
    if library.article(old).is_none() {
        return Err(MutateError::ArticleNotFound(old.to_string()));
    }
    if library.article(new).is_some() {
        return Err(MutateError::ArticleIdTaken(new.to_string()));
    }

    for article in &mut library.articles {
        if article.id == old {
            article.id = new.to_string();
        }
    }
    for entries in library.locales.values_mut() {
        if let Some(entry) = entries.remove(old) {
            entries.insert(new.to_string(), entry);
        }
    }
    Ok(())
}

/// Deletes an article and its locale entries under every language.
pub fn delete_article(library: &mut Library, id: &str) -> MutateResult<()> {
    if library.article(id).is_none() {
        return Err(MutateError::ArticleNotFound(id.to_string()));
    }

    library.articles.retain(|article| article.id != id);
    library.remove_locale_entries(id);
    Ok(())
}

/// Replaces an article's available-language set and ensures entries exist
/// across the full known-language list.
///
/// Entries for languages removed from the set are kept; they simply stop
/// being exported until the language is re-enabled.
pub fn set_article_languages(
    library: &mut Library,
    id: &str,
    languages: Vec<String>,
) -> MutateResult<()> {
    let article = library
        .article_mut(id)
        .ok_or_else(|| MutateError::ArticleNotFound(id.to_string()))?;
    article.available_languages = languages;
    library.ensure_locale_entries(id);
    Ok(())
}

/// Re-points an article's category foreign key. No entry movement, and
/// the new category's existence is deliberately not checked here: the
/// validator reports a bad reference, the mutation does not block it.
pub fn reassign_article_category(
    library: &mut Library,
    id: &str,
    new_category_id: &str,
) -> MutateResult<()> {
    let article = library
        .article_mut(id)
        .ok_or_else(|| MutateError::ArticleNotFound(id.to_string()))?;
    article.category_id = new_category_id.to_string();
    Ok(())
}

fn non_blank_category_id(id: &str) -> MutateResult<&str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(MutateError::BlankCategoryId);
    }
    Ok(trimmed)
}

fn non_blank_article_id(id: &str) -> MutateResult<&str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(MutateError::BlankArticleId);
    }
    Ok(trimmed)
}
