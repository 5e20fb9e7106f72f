//! Partitioned document layout shared by every backend.
//!
//! # Responsibility
//! - Map a library value onto the per-category document partitioning and
//!   back, over any [`DocumentStore`].
//!
//! # Invariants
//! - Import is all-or-nothing: any missing expected document aborts the
//!   whole operation and no partial model is handed out.
//! - Export writes every document of the layout; it performs no
//!   integrity checks of its own (the session gates on the validator).

use crate::model::article::Article;
use crate::model::category::Category;
use crate::model::library::Library;
use crate::model::locale::LocaleEntry;
use crate::store::{DocumentStore, StoreError, StoreResult};
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;

/// Root document holding the full category sequence.
pub const CATEGORIES_DOCUMENT: &str = "categories.json";
/// Directory of per-category article partitions.
pub const ARTICLES_DIR: &str = "articles";
/// Directory of per-language, per-category locale partitions.
pub const LOCALES_DIR: &str = "locales";

/// Layout path of one category's article partition.
pub fn article_document(category_id: &str) -> String {
    format!("{ARTICLES_DIR}/{category_id}.json")
}

/// Layout path of one language+category locale partition.
pub fn locale_document(language: &str, category_id: &str) -> String {
    format!("{LOCALES_DIR}/{language}/{category_id}.json")
}

/// Reads a whole library out of `store`.
///
/// Languages are derived from document discovery under `locales/`, not
/// from a manifest; their order is backend-specific.
///
/// # Errors
/// - [`StoreError::MissingDocument`] when `categories.json` or any
///   expected per-category document is absent.
/// - [`StoreError::Json`] when a document does not decode.
pub fn import<S: DocumentStore>(store: &S) -> StoreResult<Library> {
    let started_at = Instant::now();

    let categories: Vec<Category> = read_json(store, CATEGORIES_DOCUMENT)?;
    let languages = store.discover_languages()?;

    let mut articles: Vec<Article> = Vec::new();
    for category in &categories {
        let partition: Vec<Article> = read_json(store, &article_document(&category.id))?;
        articles.extend(partition);
    }

    let mut locales = BTreeMap::new();
    for language in &languages {
        let entries: &mut BTreeMap<String, LocaleEntry> =
            locales.entry(language.clone()).or_default();
        for category in &categories {
            let partition: BTreeMap<String, LocaleEntry> =
                read_json(store, &locale_document(language, &category.id))?;
            entries.extend(partition);
        }
    }

    info!(
        "event=import module=store status=ok categories={} articles={} languages={} duration_ms={}",
        categories.len(),
        articles.len(),
        languages.len(),
        started_at.elapsed().as_millis()
    );

    Ok(Library {
        categories,
        articles,
        locales,
        languages,
    })
}

/// Writes a whole library into `store`, one document per partition.
///
/// Locale partitions are assembled through the library's get-or-create
/// accessor, so a missing-but-expected entry is backfilled as an empty
/// entry instead of being omitted (hence `&mut Library`).
///
/// Writes are not transactional: on failure, documents written before the
/// failing one remain written.
pub fn export<S: DocumentStore>(library: &mut Library, store: &mut S) -> StoreResult<()> {
    let started_at = Instant::now();

    write_json(store, CATEGORIES_DOCUMENT, &library.categories)?;

    let category_ids: Vec<String> = library
        .categories
        .iter()
        .map(|category| category.id.clone())
        .collect();

    for category_id in &category_ids {
        let partition: Vec<&Article> = library
            .articles
            .iter()
            .filter(|article| article.category_id == *category_id)
            .collect();
        write_json(store, &article_document(category_id), &partition)?;
    }

    let languages = library.languages.clone();
    for language in &languages {
        for category_id in &category_ids {
            let article_ids: Vec<String> = library
                .articles
                .iter()
                .filter(|article| {
                    article.category_id == *category_id && article.is_available_in(language)
                })
                .map(|article| article.id.clone())
                .collect();

            let mut partition: BTreeMap<String, LocaleEntry> = BTreeMap::new();
            for article_id in &article_ids {
                let entry = library.locale_entry(language, article_id).clone();
                partition.insert(article_id.clone(), entry);
            }
            write_json(store, &locale_document(language, category_id), &partition)?;
        }
    }

    info!(
        "event=export module=store status=ok categories={} articles={} languages={} duration_ms={}",
        category_ids.len(),
        library.articles.len(),
        languages.len(),
        started_at.elapsed().as_millis()
    );

    Ok(())
}

fn read_json<S: DocumentStore, T: DeserializeOwned>(store: &S, path: &str) -> StoreResult<T> {
    let contents = store.read_document(path)?;
    serde_json::from_str(&contents).map_err(|source| StoreError::Json {
        path: path.to_string(),
        source,
    })
}

fn write_json<S: DocumentStore, T: Serialize>(
    store: &mut S,
    path: &str,
    value: &T,
) -> StoreResult<()> {
    let contents = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_string(),
        source,
    })?;
    store.write_document(path, &contents)
}
