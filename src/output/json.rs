//! JSON output formatting

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{IndexError, Result};
use crate::tree::ExampleIndex;

/// Indentation of the written document.
const INDENT: &[u8] = b"    ";

/// Render the index as JSON indented by four spaces, without a trailing
/// newline.
pub fn render_json(index: &ExampleIndex) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    index.serialize(&mut serializer)?;
    String::from_utf8(buf)
        .map_err(|e| IndexError::Serialize(<serde_json::Error as serde::ser::Error>::custom(e)))
}

/// Write the index to `path`, replacing any existing file.
pub fn write_index(index: &ExampleIndex, path: &Path) -> Result<()> {
    let json = render_json(index)?;
    fs::write(path, json).map_err(|source| IndexError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), keys = index.len(), "index written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    #[test]
    fn test_render_uses_four_space_indent() {
        let mut index = ExampleIndex::new();
        index.push("basic", "foo.ck");
        index.push("basic", "deep");
        index.ensure_key("ai");

        let json = render_json(&index).unwrap();
        let expected = "{\n    \"basic\": [\n        \"foo.ck\",\n        \"deep\"\n    ],\n    \"ai\": []\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_render_empty_index() {
        assert_eq!(render_json(&ExampleIndex::new()).unwrap(), "{}");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let tree = TestTree::new();
        let out = tree.add_file("moreExamples.json", "stale content that is longer than the index");

        let mut index = ExampleIndex::new();
        index.push("basic", "a.ck");
        write_index(&index, &out).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        let parsed: ExampleIndex = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, index);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let tree = TestTree::new();
        let out = tree.path().join("missing/dir/out.json");
        let err = write_index(&ExampleIndex::new(), &out).unwrap_err();
        assert!(matches!(err, IndexError::Write { .. }));
    }
}
