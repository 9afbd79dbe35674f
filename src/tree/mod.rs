//! Example tree walking and indexing
//!
//! `IndexWalker` makes two top-down passes over an examples tree: one that
//! collects example files that pass the content filter, and one that links
//! subfolders under their parent folder.

mod config;
mod filter;
mod index;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::{
    DEFAULT_EXAMPLES_ROOT, DEFAULT_OUTPUT_FILE, EXAMPLE_EXTENSION, EXCLUDED_DIRS, SEEDED_KEYS,
    WalkerConfig,
};
pub use filter::{BARE_WORDS, ExclusionWords, FileFilter, SPACED_WORDS};
pub use index::{ExampleIndex, FolderContents};
pub use traversal::{BaseTraversal, DirListing};
pub use walker::{IndexReport, IndexWalker};
