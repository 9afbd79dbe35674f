//! The example index: folder name -> ordered entries
//!
//! Keys and values keep insertion order both in memory and in the JSON
//! document, since the browser lists entries in the order they appear.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::config::EXAMPLE_EXTENSION;

/// Ordered map from directory name to example filenames and subfolder names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleIndex {
    entries: Vec<(String, Vec<String>)>,
    /// key -> position in `entries`
    positions: HashMap<String, usize>,
}

/// A folder's entries split the way the browser shows them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderContents {
    pub folders: Vec<String>,
    pub files: Vec<String>,
}

impl ExampleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.positions
            .get(key)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    /// Insert `key` with an empty list unless it is already present.
    /// Returns true if the key was created.
    pub fn ensure_key(&mut self, key: &str) -> bool {
        if self.contains_key(key) {
            return false;
        }
        self.positions.insert(key.to_string(), self.entries.len());
        self.entries.push((key.to_string(), Vec::new()));
        true
    }

    /// Append `value` to the list under `key`, creating the key if absent.
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.ensure_key(key);
        let pos = self.positions[key];
        self.entries[pos].1.push(value.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total number of strings across all lists.
    pub fn entry_count(&self) -> usize {
        self.entries.iter().map(|(_, v)| v.len()).sum()
    }

    /// Split a folder's entries into subfolders and example files, each
    /// sorted. An entry is a file when the text after its last `.` is the
    /// example extension; everything else is a folder.
    pub fn folder_contents(&self, key: &str) -> Option<FolderContents> {
        let values = self.get(key)?;
        let (mut files, mut folders): (Vec<String>, Vec<String>) = values
            .iter()
            .cloned()
            .partition(|name| name.rsplit('.').next() == Some(EXAMPLE_EXTENSION));
        folders.sort();
        files.sort();
        Some(FolderContents { folders, files })
    }
}

impl Serialize for ExampleIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

struct ExampleIndexVisitor;

impl<'de> Visitor<'de> for ExampleIndexVisitor {
    type Value = ExampleIndex;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping folder names to arrays of strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut index = ExampleIndex::new();
        while let Some((key, values)) = access.next_entry::<String, Vec<String>>()? {
            index.ensure_key(&key);
            for value in values {
                index.push(&key, value);
            }
        }
        Ok(index)
    }
}

impl<'de> Deserialize<'de> for ExampleIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ExampleIndexVisitor)
    }
}
