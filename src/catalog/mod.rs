//! Read-only access to the hierarchy of avatar part images
//!
//! Paths are `/`-separated and relative to the catalog root, which holds
//! `sets/<set>/...` and `backgrounds/<background set>/...`. Every listing is
//! sorted and skips hidden entries, so an unchanged catalog always yields the
//! same answers.

use crate::io::configuration::HIDDEN_PREFIX;
use crate::io::error::Result;

/// Catalog stored in a directory on disk
pub mod filesystem;
/// Catalog held entirely in memory
pub mod memory;

pub use filesystem::FsCatalog;
pub use memory::MemoryCatalog;

/// A single child of a catalog directory
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CatalogEntry {
    /// Entry name without any directory component
    pub name: String,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

impl CatalogEntry {
    /// Entry for a file
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    /// Entry for a directory
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    /// Whether the entry should be ignored by listings
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with(HIDDEN_PREFIX)
    }
}

/// Queryable tree of part images
///
/// Implementors provide raw directory reads and file contents; the listing
/// queries used by selection are derived from those.
pub trait Catalog {
    /// Immediate children of the directory at `path`, in any order
    ///
    /// # Errors
    ///
    /// Returns a catalog read error if `path` is absent, not a directory or unreadable
    fn read_dir(&self, path: &str) -> Result<Vec<CatalogEntry>>;

    /// Full contents of the file at `path`
    ///
    /// # Errors
    ///
    /// Returns a catalog read error if `path` is absent or unreadable
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;

    /// Names of the visible immediate subdirectories of `path`, sorted
    ///
    /// # Errors
    ///
    /// Returns a catalog read error if `path` cannot be read
    fn list_subdirectories(&self, path: &str) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .read_dir(path)?
            .into_iter()
            .filter(|entry| entry.is_dir && !entry.is_hidden())
            .map(|entry| entry.name)
            .collect();
        names.sort();
        tracing::trace!(path, count = names.len(), "listed subdirectories");
        Ok(names)
    }

    /// Full paths of the visible immediate files of `path`, sorted
    ///
    /// # Errors
    ///
    /// Returns a catalog read error if `path` cannot be read
    fn list_files(&self, path: &str) -> Result<Vec<String>> {
        let mut files: Vec<String> = self
            .read_dir(path)?
            .into_iter()
            .filter(|entry| !entry.is_dir && !entry.is_hidden())
            .map(|entry| join_path(path, &entry.name))
            .collect();
        files.sort();
        tracing::trace!(path, count = files.len(), "listed files");
        Ok(files)
    }

    /// Full paths of every visible descendant directory of `base`, sorted
    ///
    /// Hidden directories are skipped together with everything beneath them.
    ///
    /// # Errors
    ///
    /// Returns a catalog read error if any directory on the way cannot be read
    fn list_all_subdirectories_recursive(&self, base: &str) -> Result<Vec<String>> {
        let mut directories = Vec::new();
        collect_subdirectories(self, base, &mut directories)?;
        directories.sort();
        Ok(directories)
    }
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn read_dir(&self, path: &str) -> Result<Vec<CatalogEntry>> {
        (**self).read_dir(path)
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }
}

// Depth-first; the caller sorts the final list
fn collect_subdirectories<C: Catalog + ?Sized>(
    catalog: &C,
    dir: &str,
    directories: &mut Vec<String>,
) -> Result<()> {
    for entry in catalog.read_dir(dir)? {
        if entry.is_dir && !entry.is_hidden() {
            let sub = join_path(dir, &entry.name);
            directories.push(sub.clone());
            collect_subdirectories(catalog, &sub, directories)?;
        }
    }
    Ok(())
}

/// Join catalog path segments with `/`, ignoring empty segments
pub fn join_path(base: &str, name: &str) -> String {
    let base = base.trim_end_matches('/');
    let name = name.trim_start_matches('/');
    match (base.is_empty(), name.is_empty()) {
        (true, _) => name.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{base}/{name}"),
    }
}

/// Final segment of a catalog path
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
