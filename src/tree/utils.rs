//! Shared utility functions for tree walking

use std::path::Path;

use glob::Pattern;

use crate::error::{IndexError, Result};

/// Check if a directory should be pruned based on its name and the
/// exclusion patterns. Each pattern matches the name exactly or as a glob.
pub fn should_ignore_dir(name: &str, exclude_dirs: &[String]) -> bool {
    exclude_dirs
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Check if a file name ends with `.<extension>`. Case-sensitive.
pub fn has_extension(name: &str, extension: &str) -> bool {
    name.strip_suffix(extension)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// The index key for a directory: its last path component, or "." when the
/// path has none.
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .or_else(|| path.components().next_back().map(|c| c.as_os_str()))
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Read an example source in full. Unreadable or non-UTF-8 files are errors.
pub fn read_example(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    })
}
