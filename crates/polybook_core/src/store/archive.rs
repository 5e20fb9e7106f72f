//! ZIP-archive document store.

use crate::store::layout::LOCALES_DIR;
use crate::store::{DocumentStore, StoreError, StoreResult};
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Document store over a flat list of archive entries, held in memory.
///
/// Entry order is preserved from the decoded archive (or from write
/// order for a fresh export); language discovery follows that order.
#[derive(Debug, Clone, Default)]
pub struct ArchiveStore {
    entries: Vec<ArchiveEntry>,
}

#[derive(Debug, Clone)]
struct ArchiveEntry {
    path: String,
    contents: String,
}

impl ArchiveStore {
    /// Creates an empty store, ready to receive an export.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a ZIP archive into a store. Directory markers are skipped;
    /// every file entry is kept in archive order.
    pub fn from_zip_bytes(bytes: &[u8]) -> StoreResult<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let mut entries = Vec::new();
        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }
            let path = file.name().to_string();
            let mut contents = String::new();
            file.read_to_string(&mut contents)
                .map_err(|source| StoreError::Io {
                    path: path.clone(),
                    source,
                })?;
            entries.push(ArchiveEntry { path, contents });
        }
        Ok(Self { entries })
    }

    /// Encodes the store into ZIP bytes (deflate).
    pub fn into_zip_bytes(self) -> StoreResult<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for entry in &self.entries {
            writer.start_file(entry.path.as_str(), options)?;
            writer
                .write_all(entry.contents.as_bytes())
                .map_err(|source| StoreError::Io {
                    path: entry.path.clone(),
                    source,
                })?;
        }
        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }

    /// Number of documents currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Document paths in entry order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.path.as_str())
    }
}

impl DocumentStore for ArchiveStore {
    fn read_document(&self, path: &str) -> StoreResult<String> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.contents.clone())
            .ok_or_else(|| StoreError::MissingDocument(path.to_string()))
    }

    fn write_document(&mut self, path: &str, contents: &str) -> StoreResult<()> {
        match self.entries.iter_mut().find(|entry| entry.path == path) {
            Some(entry) => entry.contents = contents.to_string(),
            None => self.entries.push(ArchiveEntry {
                path: path.to_string(),
                contents: contents.to_string(),
            }),
        }
        Ok(())
    }

    fn discover_languages(&self) -> StoreResult<Vec<String>> {
        // First-seen order of `locales/<language>/...` path segments.
        let mut languages: Vec<String> = Vec::new();
        let prefix = format!("{LOCALES_DIR}/");
        for entry in &self.entries {
            let Some(rest) = entry.path.strip_prefix(&prefix) else {
                continue;
            };
            let Some((language, file)) = rest.split_once('/') else {
                continue;
            };
            if file.is_empty() || language.is_empty() {
                continue;
            }
            if !languages.iter().any(|known| known == language) {
                languages.push(language.to_string());
            }
        }
        Ok(languages)
    }
}
