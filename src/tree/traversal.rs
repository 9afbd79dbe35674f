//! Top-down directory listing shared by both index passes.
//!
//! The walk yields one `DirListing` per visited directory in pre-order,
//! with children sorted by name. Excluded directories are pruned before
//! they are entered, so nothing below them is ever listed.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};

use crate::error::{IndexError, Result};

use super::config::WalkerConfig;
use super::utils::{dir_name, should_ignore_dir};

/// One visited directory and its immediate children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    pub path: PathBuf,
    /// Index key for this directory (its last path component)
    pub name: String,
    /// Child directory names, excluded ones removed
    pub dirs: Vec<String>,
    /// Child file names
    pub files: Vec<String>,
}

impl DirListing {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            name: dir_name(path),
            dirs: Vec::new(),
            files: Vec::new(),
        }
    }
}

/// Common base traversal functionality shared by both passes.
pub struct BaseTraversal<'a> {
    pub config: &'a WalkerConfig,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(config: &'a WalkerConfig) -> Self {
        Self { config }
    }

    /// List every directory under `root` (including `root`) top-down.
    pub fn list(&self, root: &Path) -> Result<Vec<DirListing>> {
        if !root.exists() {
            return Err(IndexError::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(IndexError::NotADirectory(root.to_path_buf()));
        }

        let exclude_dirs = self.config.exclude_dirs.clone();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                if !is_dir_entry(entry) {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                if should_ignore_dir(&name, &exclude_dirs) {
                    tracing::debug!(path = %entry.path().display(), "pruning excluded directory");
                    return false;
                }
                true
            })
            .build();

        let mut listings: Vec<DirListing> = Vec::new();
        // directory path -> position in `listings`
        let mut positions: HashMap<PathBuf, usize> = HashMap::new();

        for result in walker {
            let entry = result?;
            let path = entry.path();

            if entry.depth() == 0 {
                positions.insert(path.to_path_buf(), listings.len());
                listings.push(DirListing::new(path));
                continue;
            }

            let Some(&parent) = path.parent().and_then(|p| positions.get(p)) else {
                continue;
            };
            let name = entry.file_name().to_string_lossy().to_string();

            if is_dir_entry(&entry) {
                listings[parent].dirs.push(name);
                // symlinked directories are listed but never entered
                if !entry.path_is_symlink() {
                    positions.insert(path.to_path_buf(), listings.len());
                    listings.push(DirListing::new(path));
                }
            } else {
                listings[parent].files.push(name);
            }
        }

        Ok(listings)
    }
}

/// Whether an entry is a directory, resolving symlinks.
fn is_dir_entry(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_dir() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_dir(),
        _ => false,
    }
}
