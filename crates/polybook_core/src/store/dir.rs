//! Directory-tree document store.

use crate::store::layout::LOCALES_DIR;
use crate::store::{DocumentStore, StoreError, StoreResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Document store rooted at a filesystem directory. Layout paths map
/// directly onto relative file paths under the root.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let mut full = self.root.clone();
        for segment in path.split('/') {
            full.push(segment);
        }
        full
    }
}

impl DocumentStore for DirStore {
    fn read_document(&self, path: &str) -> StoreResult<String> {
        match fs::read_to_string(self.resolve(path)) {
            Ok(contents) => Ok(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::MissingDocument(path.to_string()))
            }
            Err(err) => Err(StoreError::Io {
                path: path.to_string(),
                source: err,
            }),
        }
    }

    fn write_document(&mut self, path: &str, contents: &str) -> StoreResult<()> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: path.to_string(),
                source,
            })?;
        }
        fs::write(&full, contents).map_err(|source| StoreError::Io {
            path: path.to_string(),
            source,
        })
    }

    fn discover_languages(&self) -> StoreResult<Vec<String>> {
        let locales_dir = self.root.join(LOCALES_DIR);
        let reader = match fs::read_dir(&locales_dir) {
            Ok(reader) => reader,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::MissingDocument(LOCALES_DIR.to_string()));
            }
            Err(err) => {
                return Err(StoreError::Io {
                    path: LOCALES_DIR.to_string(),
                    source: err,
                });
            }
        };

        // Enumeration order is whatever the OS yields; deliberately not
        // sorted (language order is non-canonical).
        let mut languages = Vec::new();
        for entry in reader {
            let entry = entry.map_err(|source| StoreError::Io {
                path: LOCALES_DIR.to_string(),
                source,
            })?;
            let file_type = entry.file_type().map_err(|source| StoreError::Io {
                path: LOCALES_DIR.to_string(),
                source,
            })?;
            if file_type.is_dir() {
                languages.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(languages)
    }
}
