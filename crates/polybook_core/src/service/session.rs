//! Editing session facade.
//!
//! # Responsibility
//! - Own the library value, the load mode and the current selection.
//! - Route destructive operations through the injected confirmation
//!   capability and structural mutations through `service::mutate`.
//! - Gate export and folder-save on an empty validation result.
//!
//! # Invariants
//! - One session is the single mutator of its library; callers serialize
//!   operations (no queueing, no retries).
//! - A failed import leaves the previously loaded library untouched.
//! - A declined confirmation changes nothing and is not an error.

use crate::model::library::Library;
use crate::service::mutate::{self, MutateError};
use crate::store::{layout, ArchiveStore, DocumentStore, StoreError};
use crate::validate::{validate, Violation};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// How the current library was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Nothing loaded yet (fresh session).
    Idle,
    /// Loaded from a directory tree; folder-save is available.
    Folder,
    /// Loaded from an archive; only archive export is available.
    Archive,
}

/// Confirmation capability injected by the driving layer.
///
/// The session treats the returned boolean as authoritative: a
/// destructive operation proceeds only on `true`.
pub trait ConfirmPrompt {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Confirmation capability that approves everything. For headless
/// drivers and tests; interactive hosts should prompt the user instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Session-level failure surfaced to the driving layer.
#[derive(Debug)]
pub enum SessionError {
    /// Structural mutation precondition failed; nothing changed.
    Mutate(MutateError),
    /// Storage failure during import/export/save.
    Store(StoreError),
    /// Export/save refused while validation violations exist.
    ValidationBlocked { violations: usize },
    /// Folder-save requested but the session is not in folder mode.
    NotInFolderMode,
    /// Article creation requested with no category selected.
    NoCategorySelected,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mutate(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::ValidationBlocked { violations } => {
                write!(f, "refusing to persist: {violations} validation violation(s)")
            }
            Self::NotInFolderMode => write!(f, "folder-save requires a folder session"),
            Self::NoCategorySelected => write!(f, "select a category first"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mutate(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MutateError> for SessionError {
    fn from(value: MutateError) -> Self {
        Self::Mutate(value)
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// The single controller object owning a library value.
pub struct Session<C: ConfirmPrompt> {
    library: Library,
    mode: SessionMode,
    selected_category: Option<String>,
    selected_article: Option<String>,
    selected_language: Option<String>,
    confirm: C,
}

impl<C: ConfirmPrompt> Session<C> {
    /// Creates an idle session with an empty library.
    pub fn new(confirm: C) -> Self {
        Self {
            library: Library::new(),
            mode: SessionMode::Idle,
            selected_category: None,
            selected_article: None,
            selected_language: None,
            confirm,
        }
    }

    /// Creates a session around an already-built library (e.g. handed
    /// over by a driving layer that loaded it itself).
    pub fn with_library(library: Library, confirm: C) -> Self {
        let mut session = Self::new(confirm);
        session.adopt(library, SessionMode::Idle);
        session
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Mutable access for in-place content edits (names, descriptions,
    /// icon, locale entry fields). Structural changes must go through the
    /// session's operations so cascades and confirmations apply.
    pub fn library_mut(&mut self) -> &mut Library {
        &mut self.library
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn selected_article(&self) -> Option<&str> {
        self.selected_article.as_deref()
    }

    pub fn selected_language(&self) -> Option<&str> {
        self.selected_language.as_deref()
    }

    /// Selects a category and its first article, if any.
    pub fn select_category(&mut self, id: &str) {
        if self.library.category(id).is_none() {
            return;
        }
        self.selected_category = Some(id.to_string());
        self.selected_article = self
            .library
            .articles_in(id)
            .next()
            .map(|article| article.id.clone());
    }

    pub fn select_article(&mut self, id: &str) {
        if self.library.article(id).is_some() {
            self.selected_article = Some(id.to_string());
        }
    }

    pub fn select_language(&mut self, language: &str) {
        if self.library.languages.iter().any(|lang| lang == language) {
            self.selected_language = Some(language.to_string());
        }
    }

    /// Recomputes the full violation list.
    pub fn validation(&self) -> Vec<Violation> {
        validate(&self.library)
    }

    pub fn has_errors(&self) -> bool {
        !self.validation().is_empty()
    }

    /// Creates a category and selects it.
    pub fn add_category(&mut self, id: &str) -> Result<(), SessionError> {
        mutate::create_category(&mut self.library, id)?;
        self.selected_category = Some(id.trim().to_string());
        self.selected_article = None;
        Ok(())
    }

    /// Renames a category after confirmation. Returns `Ok(false)` when
    /// the prompt is declined (nothing changed).
    pub fn rename_category(&mut self, old: &str, new: &str) -> Result<bool, SessionError> {
        let prompt = format!("Rename category to {new}? This updates article references.");
        if !self.confirm.confirm(&prompt) {
            return Ok(false);
        }
        mutate::rename_category(&mut self.library, old, new)?;
        if self.selected_category.as_deref() == Some(old) {
            self.selected_category = Some(new.trim().to_string());
        }
        Ok(true)
    }

    /// Deletes a category and its articles after confirmation. Returns
    /// `Ok(false)` when the prompt is declined.
    pub fn delete_category(&mut self, id: &str) -> Result<bool, SessionError> {
        let related = self.library.articles_in(id).count();
        let prompt = format!("Delete category {id} and {related} articles?");
        if !self.confirm.confirm(&prompt) {
            return Ok(false);
        }
        let removed = mutate::delete_category(&mut self.library, id)?;
        info!(
            "event=delete_category module=session status=ok id={id} cascaded_articles={}",
            removed.len()
        );
        self.selected_category = self
            .library
            .categories
            .first()
            .map(|category| category.id.clone());
        self.selected_article = None;
        Ok(true)
    }

    /// Creates an article in the currently selected category and selects
    /// it.
    pub fn add_article(&mut self, id: &str) -> Result<(), SessionError> {
        let category_id = self
            .selected_category
            .clone()
            .ok_or(SessionError::NoCategorySelected)?;
        mutate::create_article(&mut self.library, &category_id, id)?;
        self.selected_article = Some(id.trim().to_string());
        Ok(())
    }

    /// Renames an article after confirmation. Returns `Ok(false)` when
    /// the prompt is declined.
    pub fn rename_article(&mut self, old: &str, new: &str) -> Result<bool, SessionError> {
        let prompt = format!("Rename article to {new}? This updates locale entries.");
        if !self.confirm.confirm(&prompt) {
            return Ok(false);
        }
        mutate::rename_article(&mut self.library, old, new)?;
        if self.selected_article.as_deref() == Some(old) {
            self.selected_article = Some(new.trim().to_string());
        }
        Ok(true)
    }

    /// Deletes an article after confirmation. Returns `Ok(false)` when
    /// the prompt is declined.
    pub fn delete_article(&mut self, id: &str) -> Result<bool, SessionError> {
        let prompt = format!("Delete article {id}?");
        if !self.confirm.confirm(&prompt) {
            return Ok(false);
        }
        mutate::delete_article(&mut self.library, id)?;
        self.selected_article = self
            .selected_category
            .as_deref()
            .and_then(|category_id| self.library.articles_in(category_id).next())
            .map(|article| article.id.clone());
        Ok(true)
    }

    /// Replaces an article's language set. No confirmation: the change is
    /// non-destructive, entries are kept.
    pub fn set_article_languages(
        &mut self,
        id: &str,
        languages: Vec<String>,
    ) -> Result<(), SessionError> {
        mutate::set_article_languages(&mut self.library, id, languages)?;
        Ok(())
    }

    /// Moves an article to another category and follows it with the
    /// selection.
    pub fn reassign_article_category(
        &mut self,
        id: &str,
        new_category_id: &str,
    ) -> Result<(), SessionError> {
        mutate::reassign_article_category(&mut self.library, id, new_category_id)?;
        self.selected_category = Some(new_category_id.to_string());
        Ok(())
    }

    /// Imports a library from a directory store and enters folder mode.
    ///
    /// On failure the previous library (and mode) are untouched.
    pub fn open_folder<S: DocumentStore>(&mut self, store: &S) -> Result<(), SessionError> {
        let library = layout::import(store)?;
        self.adopt(library, SessionMode::Folder);
        Ok(())
    }

    /// Imports a library from an archive store and enters archive mode.
    ///
    /// On failure the previous library (and mode) are untouched.
    pub fn open_archive(&mut self, store: &ArchiveStore) -> Result<(), SessionError> {
        let library = layout::import(store)?;
        self.adopt(library, SessionMode::Archive);
        Ok(())
    }

    /// Writes the library back into a directory store.
    ///
    /// Refused while validation violations exist or outside folder mode.
    /// Not transactional: a failure can leave already-written documents
    /// behind.
    pub fn save_to_folder<S: DocumentStore>(&mut self, store: &mut S) -> Result<(), SessionError> {
        if self.mode != SessionMode::Folder {
            return Err(SessionError::NotInFolderMode);
        }
        self.ensure_valid_for_persist("save")?;
        layout::export(&mut self.library, store)?;
        Ok(())
    }

    /// Exports the library as ZIP archive bytes.
    ///
    /// Refused while validation violations exist. Available in any mode.
    pub fn export_archive(&mut self) -> Result<Vec<u8>, SessionError> {
        self.ensure_valid_for_persist("export")?;
        let mut store = ArchiveStore::new();
        layout::export(&mut self.library, &mut store)?;
        Ok(store.into_zip_bytes()?)
    }

    fn ensure_valid_for_persist(&self, operation: &str) -> Result<(), SessionError> {
        let violations = self.validation();
        if violations.is_empty() {
            return Ok(());
        }
        warn!(
            "event={operation} module=session status=blocked violations={}",
            violations.len()
        );
        Err(SessionError::ValidationBlocked {
            violations: violations.len(),
        })
    }

    fn adopt(&mut self, library: Library, mode: SessionMode) {
        self.library = library;
        self.mode = mode;
        self.selected_category = self
            .library
            .categories
            .first()
            .map(|category| category.id.clone());
        self.selected_article = self
            .selected_category
            .as_deref()
            .and_then(|category_id| self.library.articles_in(category_id).next())
            .map(|article| article.id.clone());
        self.selected_language = self.library.default_language().map(str::to_string);
    }
}
