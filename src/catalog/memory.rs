//! In-memory catalog for synthetic part trees

use crate::catalog::{Catalog, CatalogEntry, base_name, join_path};
use crate::io::error::{Result, catalog_read};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{Error, ErrorKind};

/// Part catalog held in maps keyed by catalog path
///
/// Directories are implied by the files inserted beneath them; empty
/// directories can be added explicitly. The root directory always exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    files: BTreeMap<String, Vec<u8>>,
    dirs: BTreeSet<String>,
}

impl MemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and every directory above it
    pub fn insert_file(&mut self, path: &str, contents: impl Into<Vec<u8>>) {
        let path = normalize(path);
        if let Some((parent, _)) = path.rsplit_once('/') {
            self.insert_dir(parent);
        }
        self.files.insert(path, contents.into());
    }

    /// Add a directory and every directory above it
    pub fn insert_dir(&mut self, path: &str) {
        let mut current = String::new();
        for segment in normalize(path).split('/').filter(|s| !s.is_empty()) {
            current = join_path(&current, segment);
            self.dirs.insert(current.clone());
        }
    }

    /// Builder form of [`Self::insert_file`]
    #[must_use]
    pub fn with_file(mut self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.insert_file(path, contents);
        self
    }

    /// Builder form of [`Self::insert_dir`]
    #[must_use]
    pub fn with_dir(mut self, path: &str) -> Self {
        self.insert_dir(path);
        self
    }

    /// Number of files in the catalog
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    fn is_dir(&self, path: &str) -> bool {
        path.is_empty() || self.dirs.contains(path)
    }
}

impl Catalog for MemoryCatalog {
    fn read_dir(&self, path: &str) -> Result<Vec<CatalogEntry>> {
        let path = normalize(path);
        if !self.is_dir(&path) {
            return Err(catalog_read(
                &path,
                Error::new(ErrorKind::NotFound, "no such directory"),
            ));
        }

        let is_child = |candidate: &str| {
            let parent = candidate.rsplit_once('/').map_or("", |(parent, _)| parent);
            parent == path
        };

        let dirs = self
            .dirs
            .iter()
            .filter(|dir| is_child(dir.as_str()))
            .map(|dir| CatalogEntry::dir(base_name(dir)));
        let files = self
            .files
            .keys()
            .filter(|file| is_child(file.as_str()))
            .map(|file| CatalogEntry::file(base_name(file)));

        Ok(dirs.chain(files).collect())
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let path = normalize(path);
        self.files.get(&path).cloned().ok_or_else(|| {
            catalog_read(&path, Error::new(ErrorKind::NotFound, "no such file"))
        })
    }
}

fn normalize(path: &str) -> String {
    path.trim_matches('/').to_string()
}
