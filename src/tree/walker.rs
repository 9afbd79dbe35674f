//! IndexWalker - builds the example index in two passes

use std::path::Path;

use crate::error::Result;

use super::config::WalkerConfig;
use super::filter::FileFilter;
use super::index::ExampleIndex;
use super::traversal::BaseTraversal;
use super::utils::{has_extension, read_example};

/// The finished index plus the counters shown to the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexReport {
    pub index: ExampleIndex,
    /// Example files that passed the content filter
    pub files_converted: usize,
    /// Subfolder names linked under their parent in the second pass
    pub subfolders_added: usize,
}

/// Walks an examples tree and builds the index.
///
/// The first pass adds every included example under its parent directory's
/// name. Seeded keys are then inserted, and a second, independent walk links
/// each subdirectory that already has a key under its parent's key.
pub struct IndexWalker {
    config: WalkerConfig,
    filter: FileFilter,
}

impl IndexWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let filter = FileFilter::new(config.exclude_words.clone());
        Self { config, filter }
    }

    pub fn walk(&self, root: &Path) -> Result<IndexReport> {
        let mut index = ExampleIndex::new();

        let files_converted = self.collect_examples(root, &mut index)?;
        tracing::info!(files_converted, keys = index.len(), "example pass done");

        self.seed_keys(&mut index);

        let subfolders_added = self.link_subfolders(root, &mut index)?;
        tracing::info!(subfolders_added, keys = index.len(), "subfolder pass done");

        Ok(IndexReport {
            index,
            files_converted,
            subfolders_added,
        })
    }

    /// First pass: add each included example under its directory's name.
    /// Returns the number of examples added.
    pub fn collect_examples(&self, root: &Path, index: &mut ExampleIndex) -> Result<usize> {
        let traversal = BaseTraversal::new(&self.config);
        let mut count = 0;

        for listing in traversal.list(root)? {
            for file in &listing.files {
                if !has_extension(file, &self.config.extension) {
                    continue;
                }
                let path = listing.path.join(file);
                let content = read_example(&path)?;

                if let Some(word) = self.filter.excluded_by(&content) {
                    tracing::debug!(path = %path.display(), word = word.trim_end(), "excluding example");
                    continue;
                }
                index.push(&listing.name, file.as_str());
                count += 1;
            }
        }

        Ok(count)
    }

    /// Insert the configured keys that hold only subfolders.
    pub fn seed_keys(&self, index: &mut ExampleIndex) {
        for key in &self.config.seeded_keys {
            index.ensure_key(key);
        }
    }

    /// Second pass: for every directory, append each child directory whose
    /// name is already a key to the directory's own list.
    /// Returns the number of links added.
    pub fn link_subfolders(&self, root: &Path, index: &mut ExampleIndex) -> Result<usize> {
        let traversal = BaseTraversal::new(&self.config);
        let mut count = 0;

        for listing in traversal.list(root)? {
            for dir in &listing.dirs {
                if !index.contains_key(dir) {
                    continue;
                }
                if !index.contains_key(&listing.name) {
                    tracing::warn!(
                        parent = %listing.name,
                        child = %dir,
                        "parent folder has no examples of its own, adding key"
                    );
                }
                index.push(&listing.name, dir.as_str());
                count += 1;
            }
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;
    use crate::test_utils::TestTree;

    fn build(tree: &TestTree) -> IndexReport {
        IndexWalker::new(WalkerConfig::default())
            .walk(tree.path())
            .unwrap()
    }

    #[test]
    fn test_parent_links_child_folder() {
        let tree = TestTree::new();
        tree.add_file("foo/bar.ck", "SinOsc s => dac;");
        tree.add_file("foo/skip.ck", "MidiIn min; ");
        tree.add_file("foo/baz/x.ck", "Gain g;");

        let report = build(&tree);
        let index = &report.index;
        assert_eq!(index.get("foo").unwrap(), ["bar.ck", "baz"]);
        assert_eq!(index.get("baz").unwrap(), ["x.ck"]);
        assert!(index.iter().all(|(_, v)| !v.iter().any(|s| s == "skip.ck")));
        assert_eq!(report.files_converted, 2);
        assert_eq!(report.subfolders_added, 2); // "foo" under root, "baz" under foo
    }

    #[test]
    fn test_seeded_key_is_present_and_linked() {
        let tree = TestTree::new();
        tree.add_file("top.ck", "");
        tree.add_file("ai/knn/demo.ck", "");

        let report = build(&tree);
        let index = &report.index;
        let root = tree.name();
        assert_eq!(index.get(&root).unwrap(), ["top.ck", "ai"]);
        assert_eq!(index.get("ai").unwrap(), ["knn"]);
        assert_eq!(index.get("knn").unwrap(), ["demo.ck"]);
    }

    #[test]
    fn test_seeded_key_without_directory() {
        let tree = TestTree::new();
        tree.add_file("basic/a.ck", "");

        let index = build(&tree).index;
        assert!(index.get("ai").unwrap().is_empty());
    }

    #[test]
    fn test_key_order_follows_walk() {
        let tree = TestTree::new();
        tree.add_file("b/one.ck", "");
        tree.add_file("a/inner/two.ck", "");
        tree.add_file("a/three.ck", "");
        tree.add_file("root.ck", "");

        let index = build(&tree).index;
        let root = tree.name();
        let keys: Vec<_> = index.keys().collect();
        assert_eq!(keys, [root.as_str(), "a", "inner", "b", "ai"]);
        assert_eq!(index.get(&root).unwrap(), ["root.ck", "a", "b"]);
        assert_eq!(index.get("a").unwrap(), ["three.ck", "inner"]);
    }

    #[test]
    fn test_only_example_extension_is_read() {
        let tree = TestTree::new();
        tree.add_file("basic/readme.txt", "MidiIn min; ");
        tree.add_file("basic/data.wav", "");
        tree.add_file("basic/demo.ck", "");

        let report = build(&tree);
        assert_eq!(report.index.get("basic").unwrap(), ["demo.ck"]);
        assert_eq!(report.files_converted, 1);
    }

    #[test]
    fn test_directory_without_examples_has_no_key() {
        let tree = TestTree::new();
        tree.add_file("top.ck", "");
        tree.add_file("hid/only.ck", "Hid hi;");
        tree.add_file("data/sound.wav", "");

        let index = build(&tree).index;
        assert!(!index.contains_key("hid"));
        assert!(!index.contains_key("data"));
        assert_eq!(index.get(&tree.name()).unwrap(), ["top.ck"]);
    }

    #[test]
    fn test_excluded_directory_contributes_nothing() {
        let tree = TestTree::new();
        tree.add_file("top.ck", "");
        tree.add_file("book/digital-artists/chapter1/a.ck", "");
        tree.add_file("basic/book/b.ck", "");

        let report = build(&tree);
        let index = &report.index;
        for key in ["book", "digital-artists", "chapter1"] {
            assert!(!index.contains_key(key), "unexpected key {key}");
        }
        assert!(!index.iter().any(|(_, v)| v.iter().any(|s| s == "a.ck" || s == "b.ck")));
        assert_eq!(report.files_converted, 1);
    }

    #[test]
    fn test_same_folder_name_shares_key() {
        let tree = TestTree::new();
        tree.add_file("one/data/a.ck", "");
        tree.add_file("two/data/b.ck", "");

        let index = build(&tree).index;
        assert_eq!(index.get("data").unwrap(), ["a.ck", "b.ck"]);
        // both parents get created in the link pass
        assert_eq!(index.get("one").unwrap(), ["data"]);
        assert_eq!(index.get("two").unwrap(), ["data"]);
    }

    #[test]
    fn test_counts_match_entry_total() {
        let tree = TestTree::new();
        tree.add_file("top.ck", "");
        tree.add_file("basic/a.ck", "");
        tree.add_file("basic/b.ck", "OscIn oin;");
        tree.add_file("basic/deep/c.ck", "");
        tree.add_file("stk/d.ck", "Serial");

        let report = build(&tree);
        assert_eq!(
            report.index.entry_count(),
            report.files_converted + report.subfolders_added
        );
    }

    #[test]
    fn test_custom_seed_and_exclusions() {
        let tree = TestTree::new();
        tree.add_file("top.ck", "");
        tree.add_file("skipme/a.ck", "");
        tree.add_file("basic/b.ck", "");

        let config = WalkerConfig {
            exclude_dirs: vec!["skip*".to_string()],
            seeded_keys: vec!["ml".to_string(), "ai".to_string()],
            ..Default::default()
        };
        let index = IndexWalker::new(config).walk(tree.path()).unwrap().index;
        assert!(!index.contains_key("skipme"));
        let keys: Vec<_> = index.keys().collect();
        assert_eq!(keys, [tree.name().as_str(), "basic", "ml", "ai"]);
    }

    #[test]
    fn test_unreadable_example_aborts() {
        let tree = TestTree::new();
        tree.add_file("basic/a.ck", "");
        std::fs::write(tree.path().join("basic/bad.ck"), [0xff, 0xfe, 0x00]).unwrap();

        let err = IndexWalker::new(WalkerConfig::default())
            .walk(tree.path())
            .unwrap_err();
        assert!(matches!(err, IndexError::Read { .. }));
    }
}
