//! Storage adapters and the partitioned document layout.
//!
//! # Responsibility
//! - Define the abstract document-store capability the core persists
//!   through, and its error model.
//! - Host the two interchangeable backends (directory tree, ZIP archive)
//!   and the layout mapping shared between them.
//!
//! # Invariants
//! - Both backends speak the identical layout: `categories.json`,
//!   `articles/<categoryId>.json`, `locales/<language>/<categoryId>.json`.
//! - A missing expected document is an error, never treated as empty.
//! - Language discovery order is backend-specific; the two backends are
//!   not guaranteed to agree on it for the same content.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod archive;
pub mod dir;
pub mod layout;

pub use archive::ArchiveStore;
pub use dir::DirStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error, tagged with the layout path involved.
#[derive(Debug)]
pub enum StoreError {
    /// An expected document is absent. Fatal to the whole import.
    MissingDocument(String),
    /// Underlying I/O failure while reading or writing a document.
    Io {
        path: String,
        source: std::io::Error,
    },
    /// A document exists but does not decode as the expected JSON shape.
    Json {
        path: String,
        source: serde_json::Error,
    },
    /// Archive container could not be decoded or encoded.
    Archive { source: zip::result::ZipError },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDocument(path) => write!(f, "missing document: {path}"),
            Self::Io { path, source } => write!(f, "i/o failure on {path}: {source}"),
            Self::Json { path, source } => write!(f, "invalid json in {path}: {source}"),
            Self::Archive { source } => write!(f, "archive failure: {source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingDocument(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Archive { source } => Some(source),
        }
    }
}

impl From<zip::result::ZipError> for StoreError {
    fn from(value: zip::result::ZipError) -> Self {
        Self::Archive { source: value }
    }
}

/// Abstract hierarchical readable/writable document store.
///
/// Paths are `/`-separated layout paths relative to the store root.
/// Implementations decide how paths map onto their medium.
pub trait DocumentStore {
    /// Reads one document's full text. A nonexistent document yields
    /// [`StoreError::MissingDocument`].
    fn read_document(&self, path: &str) -> StoreResult<String>;

    /// Writes one document, creating it (and any intermediate levels) as
    /// needed, replacing prior contents.
    fn write_document(&mut self, path: &str, contents: &str) -> StoreResult<()>;

    /// Lists the language codes present under `locales/`.
    ///
    /// The order is whatever the backend's enumeration yields and is NOT
    /// guaranteed stable across backends for the same content.
    fn discover_languages(&self) -> StoreResult<Vec<String>>;
}
