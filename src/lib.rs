//! chuckdex - index ChucK example programs for the web IDE's example browser

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{IndexError, Result};
pub use output::{OutputConfig, print_report, render_json, write_index, write_report};
pub use tree::{
    ExampleIndex, ExclusionWords, FileFilter, FolderContents, IndexReport, IndexWalker,
    WalkerConfig,
};
