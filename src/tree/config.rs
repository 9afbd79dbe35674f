//! Configuration types for the example walker

use super::filter::ExclusionWords;

/// Examples root used when none is given on the command line.
pub const DEFAULT_EXAMPLES_ROOT: &str = "chuck/examples";

/// Where the web IDE expects the index, relative to the scripts folder.
pub const DEFAULT_OUTPUT_FILE: &str = "../examples/moreExamples.json";

/// Extension of ChucK example sources.
pub const EXAMPLE_EXTENSION: &str = "ck";

/// Directories whose subtree is never entered.
pub const EXCLUDED_DIRS: &[&str] = &["book"];

/// Keys added with an empty list after the file pass. `ai` only holds
/// subfolders, so it has no files of its own to create the key.
pub const SEEDED_KEYS: &[&str] = &["ai"];

/// Configuration for walking an examples tree.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// File extension (without the dot) of example sources
    pub extension: String,
    /// Directory names or glob patterns pruned from the walk
    pub exclude_dirs: Vec<String>,
    pub exclude_words: ExclusionWords,
    pub seeded_keys: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            extension: EXAMPLE_EXTENSION.to_string(),
            exclude_dirs: EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
            exclude_words: ExclusionWords::default(),
            seeded_keys: SEEDED_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}
