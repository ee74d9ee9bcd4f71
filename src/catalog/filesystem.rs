//! Catalog backed by a directory tree on disk

use crate::catalog::{Catalog, CatalogEntry};
use crate::io::error::{Result, catalog_read};
use std::path::{Path, PathBuf};

/// Part catalog rooted at a directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FsCatalog {
    root: PathBuf,
}

impl FsCatalog {
    /// Create a catalog rooted at `root`
    ///
    /// The directory is not touched until the first query.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the catalog
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |full, segment| full.join(segment))
    }
}

impl Catalog for FsCatalog {
    fn read_dir(&self, path: &str) -> Result<Vec<CatalogEntry>> {
        let entries = std::fs::read_dir(self.resolve(path)).map_err(|e| catalog_read(path, e))?;

        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| catalog_read(path, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            // Follows symlinks so linked part directories behave like real ones
            let is_dir = entry.path().is_dir();
            children.push(CatalogEntry { name, is_dir });
        }
        Ok(children)
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        std::fs::read(self.resolve(path)).map_err(|e| catalog_read(path, e))
    }
}
