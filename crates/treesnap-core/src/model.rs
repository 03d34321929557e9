//! Snapshot data model.
//!
//! A [`Report`] is the ordered list of [`FileRecord`]s taken at snapshot time.
//! A [`ReportIndex`] is the keyed view of a loaded report used during
//! reconciliation.

use crate::hashing::ContentHash;
use crate::paths::path_key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One regular file under the snapshot root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Root-relative path as found on disk (original case)
    pub relative_path: String,
    /// Exact byte length from filesystem metadata
    pub size_bytes: u64,
    /// SHA-256 of the full content
    pub content_hash: ContentHash,
}

impl FileRecord {
    /// Lowercased path key, the form persisted in the report.
    pub fn key(&self) -> String {
        path_key(&self.relative_path)
    }
}

/// Size and hash recorded for a path key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedFile {
    pub size_bytes: u64,
    pub content_hash: ContentHash,
}

/// Records in snapshot enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub records: Vec<FileRecord>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keyed view of the report. Later records win on duplicate keys.
    pub fn into_index(self) -> ReportIndex {
        let mut index = ReportIndex::default();
        for record in self.records {
            let key = record.key();
            index.insert(
                key,
                RecordedFile {
                    size_bytes: record.size_bytes,
                    content_hash: record.content_hash,
                },
            );
        }
        index
    }
}

/// Path key → recorded metadata.
///
/// Duplicate keys are last-write-wins: a later report line, or a second on-disk
/// file whose path differs only in case, replaces the earlier entry.
/// Iteration is in key order, which keeps "missing" output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportIndex {
    entries: BTreeMap<String, RecordedFile>,
}

impl ReportIndex {
    /// Insert or replace; returns the displaced entry, if any.
    pub fn insert(&mut self, key: String, file: RecordedFile) -> Option<RecordedFile> {
        self.entries.insert(key, file)
    }

    pub fn get(&self, key: &str) -> Option<&RecordedFile> {
        self.entries.get(key)
    }

    /// Remove a key, marking it as accounted for.
    pub fn take(&mut self, key: &str) -> Option<RecordedFile> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RecordedFile)> {
        self.entries.iter()
    }
}

impl IntoIterator for ReportIndex {
    type Item = (String, RecordedFile);
    type IntoIter = std::collections::btree_map::IntoIter<String, RecordedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, size: u64, hash: &str) -> FileRecord {
        FileRecord {
            relative_path: path.to_string(),
            size_bytes: size,
            content_hash: ContentHash::from(hash),
        }
    }

    #[test]
    fn test_key_is_lowercased() {
        assert_eq!(record("Docs/README.md", 1, "h").key(), "docs/readme.md");
    }

    #[test]
    fn test_index_last_write_wins_on_case_collision() {
        let report = Report {
            records: vec![record("A.txt", 1, "first"), record("a.txt", 2, "second")],
        };
        let index = report.into_index();

        assert_eq!(index.len(), 1);
        let entry = index.get("a.txt").unwrap();
        assert_eq!(entry.size_bytes, 2);
        assert_eq!(entry.content_hash.as_str(), "second");
    }

    #[test]
    fn test_take_removes_entry() {
        let mut index = Report {
            records: vec![record("a.txt", 1, "h")],
        }
        .into_index();

        assert!(index.take("a.txt").is_some());
        assert!(index.take("a.txt").is_none());
        assert!(index.is_empty());
    }
}
