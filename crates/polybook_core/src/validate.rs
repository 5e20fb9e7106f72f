//! Referential-integrity validation over a whole library.
//!
//! # Responsibility
//! - Enumerate every integrity violation of a library value, in model
//!   order, without short-circuiting.
//! - Provide the word counter used by the description length rule.
//!
//! # Invariants
//! - Validation never mutates the library and never fails; an invalid
//!   library yields violations, not errors.
//! - Export and folder-save are allowed only while the violation list is
//!   empty; intermediate invalid states are legal.

use crate::model::library::Library;
use crate::model::locale::LocaleField;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// Inclusive word-count range required of category descriptions.
pub const DESCRIPTION_MIN_WORDS: usize = 4;
pub const DESCRIPTION_MAX_WORDS: usize = 5;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("valid word regex"));

/// One integrity violation, tagged with the offending id(s).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    DuplicateCategoryId {
        id: String,
    },
    DuplicateArticleId {
        id: String,
    },
    MissingCategoryIcon {
        id: String,
    },
    MissingCategoryName {
        id: String,
        language: String,
    },
    MissingCategoryDescription {
        id: String,
        language: String,
    },
    DescriptionWordCount {
        id: String,
        language: String,
        words: usize,
    },
    InvalidCategoryRef {
        article_id: String,
        category_id: String,
    },
    NoAvailableLanguages {
        article_id: String,
    },
    UnknownLanguage {
        article_id: String,
        language: String,
    },
    MissingLocaleEntry {
        article_id: String,
        language: String,
    },
    MissingLocaleField {
        article_id: String,
        language: String,
        field: LocaleField,
    },
    DanglingLocaleEntry {
        article_id: String,
        language: String,
    },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateCategoryId { id } => write!(f, "duplicate category id: {id}"),
            Self::DuplicateArticleId { id } => write!(f, "duplicate article id: {id}"),
            Self::MissingCategoryIcon { id } => write!(f, "category {id} is missing an icon"),
            Self::MissingCategoryName { id, language } => {
                write!(f, "category {id} is missing a name for {language}")
            }
            Self::MissingCategoryDescription { id, language } => {
                write!(f, "category {id} is missing a description for {language}")
            }
            Self::DescriptionWordCount {
                id,
                language,
                words,
            } => write!(
                f,
                "category {id} description ({language}) should be \
                 {DESCRIPTION_MIN_WORDS}-{DESCRIPTION_MAX_WORDS} words, found {words}"
            ),
            Self::InvalidCategoryRef {
                article_id,
                category_id,
            } => write!(f, "article {article_id} has invalid categoryId {category_id}"),
            Self::NoAvailableLanguages { article_id } => {
                write!(f, "article {article_id} has no available languages")
            }
            Self::UnknownLanguage {
                article_id,
                language,
            } => write!(f, "article {article_id} has unknown language {language}"),
            Self::MissingLocaleEntry {
                article_id,
                language,
            } => write!(f, "missing locale entry for {article_id} ({language})"),
            Self::MissingLocaleField {
                article_id,
                language,
                field,
            } => write!(
                f,
                "locale entry {article_id} ({language}) is missing field {}",
                field.as_str()
            ),
            Self::DanglingLocaleEntry {
                article_id,
                language,
            } => write!(f, "dangling locale entry {article_id} in {language}"),
        }
    }
}

/// Counts words in `text`: a word is a maximal run of letters or digits;
/// punctuation and whitespace separate.
pub fn count_words(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

/// Enumerates every integrity violation of `library`, in model order.
///
/// # Contract
/// - Never short-circuits: all violations are reported in one pass.
/// - An empty result is the precondition for export and folder-save.
pub fn validate(library: &Library) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut category_ids: HashSet<&str> = HashSet::new();
    for category in &library.categories {
        if !category_ids.insert(category.id.as_str()) {
            violations.push(Violation::DuplicateCategoryId {
                id: category.id.clone(),
            });
        }
        if category.icon.is_empty() {
            violations.push(Violation::MissingCategoryIcon {
                id: category.id.clone(),
            });
        }
        for language in &library.languages {
            if category.name(language).is_empty() {
                violations.push(Violation::MissingCategoryName {
                    id: category.id.clone(),
                    language: language.clone(),
                });
            }
            let description = category.description(language);
            if description.is_empty() {
                violations.push(Violation::MissingCategoryDescription {
                    id: category.id.clone(),
                    language: language.clone(),
                });
            } else {
                let words = count_words(description);
                if !(DESCRIPTION_MIN_WORDS..=DESCRIPTION_MAX_WORDS).contains(&words) {
                    violations.push(Violation::DescriptionWordCount {
                        id: category.id.clone(),
                        language: language.clone(),
                        words,
                    });
                }
            }
        }
    }

    let mut article_ids: HashSet<&str> = HashSet::new();
    for article in &library.articles {
        if !article_ids.insert(article.id.as_str()) {
            violations.push(Violation::DuplicateArticleId {
                id: article.id.clone(),
            });
        }
        if !category_ids.contains(article.category_id.as_str()) {
            violations.push(Violation::InvalidCategoryRef {
                article_id: article.id.clone(),
                category_id: article.category_id.clone(),
            });
        }
        if article.available_languages.is_empty() {
            violations.push(Violation::NoAvailableLanguages {
                article_id: article.id.clone(),
            });
        } else {
            for language in &article.available_languages {
                if !library.languages.contains(language) {
                    violations.push(Violation::UnknownLanguage {
                        article_id: article.id.clone(),
                        language: language.clone(),
                    });
                }
            }
        }
    }

    for article in &library.articles {
        for language in &article.available_languages {
            match library.peek_locale_entry(language, &article.id) {
                None => violations.push(Violation::MissingLocaleEntry {
                    article_id: article.id.clone(),
                    language: language.clone(),
                }),
                Some(entry) => {
                    for field in entry.missing_fields() {
                        violations.push(Violation::MissingLocaleField {
                            article_id: article.id.clone(),
                            language: language.clone(),
                            field,
                        });
                    }
                }
            }
        }
    }

    for (language, entries) in &library.locales {
        for article_id in entries.keys() {
            if !article_ids.contains(article_id.as_str()) {
                violations.push(Violation::DanglingLocaleEntry {
                    article_id: article_id.clone(),
                    language: language.clone(),
                });
            }
        }
    }

    violations
}
