//! Reconciliation output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! `Matched` files are counted but never listed individually.

use crate::hashing::ContentHash;
use serde::{Deserialize, Serialize};

/// The five disjoint outcomes for a compared path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FileStatus {
    /// Present in both, same size and same hash
    Matched,
    /// Present in both, sizes differ (hash not computed)
    SizeMismatch,
    /// Present in both, same size, hashes differ
    HashMismatch,
    /// On disk but not in the report
    NewInFolder,
    /// In the report but not on disk
    MissingFromReport,
}

impl FileStatus {
    /// Every status in reporting order
    pub const ALL: [FileStatus; 5] = [
        FileStatus::Matched,
        FileStatus::SizeMismatch,
        FileStatus::HashMismatch,
        FileStatus::NewInFolder,
        FileStatus::MissingFromReport,
    ];
}

/// A non-matched file with the metadata needed to explain it.
///
/// `path` is the on-disk display path for files that exist, and the
/// lowercased report key for missing files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status")]
pub enum FileChange {
    SizeMismatch {
        path: String,
        report_size: u64,
        current_size: u64,
    },
    HashMismatch {
        path: String,
        size: u64,
        report_hash: ContentHash,
        current_hash: ContentHash,
    },
    NewInFolder {
        path: String,
        size: u64,
    },
    MissingFromReport {
        path: String,
        report_size: u64,
        report_hash: ContentHash,
    },
}

impl FileChange {
    pub fn status(&self) -> FileStatus {
        match self {
            FileChange::SizeMismatch { .. } => FileStatus::SizeMismatch,
            FileChange::HashMismatch { .. } => FileStatus::HashMismatch,
            FileChange::NewInFolder { .. } => FileStatus::NewInFolder,
            FileChange::MissingFromReport { .. } => FileStatus::MissingFromReport,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            FileChange::SizeMismatch { path, .. }
            | FileChange::HashMismatch { path, .. }
            | FileChange::NewInFolder { path, .. }
            | FileChange::MissingFromReport { path, .. } => path,
        }
    }
}

/// Aggregate counts per classification.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub matched: usize,
    pub size_mismatch: usize,
    pub hash_mismatch: usize,
    pub new_in_folder: usize,
    pub missing_from_report: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: FileStatus) {
        *self.slot(status) += 1;
    }

    pub fn get(&self, status: FileStatus) -> usize {
        match status {
            FileStatus::Matched => self.matched,
            FileStatus::SizeMismatch => self.size_mismatch,
            FileStatus::HashMismatch => self.hash_mismatch,
            FileStatus::NewInFolder => self.new_in_folder,
            FileStatus::MissingFromReport => self.missing_from_report,
        }
    }

    /// Everything except `Matched`
    pub fn total_changes(&self) -> usize {
        self.size_mismatch + self.hash_mismatch + self.new_in_folder + self.missing_from_report
    }

    fn slot(&mut self, status: FileStatus) -> &mut usize {
        match status {
            FileStatus::Matched => &mut self.matched,
            FileStatus::SizeMismatch => &mut self.size_mismatch,
            FileStatus::HashMismatch => &mut self.hash_mismatch,
            FileStatus::NewInFolder => &mut self.new_in_folder,
            FileStatus::MissingFromReport => &mut self.missing_from_report,
        }
    }
}

/// Outcome of one reconciliation run. Not persisted.
///
/// `entries` lists present files in enumeration order, then missing files
/// in key order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReconciliationResult {
    pub counts: StatusCounts,
    pub entries: Vec<FileChange>,
}

impl ReconciliationResult {
    pub fn record_match(&mut self) {
        self.counts.record(FileStatus::Matched);
    }

    pub fn record_change(&mut self, change: FileChange) {
        self.counts.record(change.status());
        self.entries.push(change);
    }

    /// True when nothing differs from the report
    pub fn is_clean(&self) -> bool {
        self.counts.total_changes() == 0
    }

    pub fn changes_with_status(&self, status: FileStatus) -> impl Iterator<Item = &FileChange> {
        self.entries.iter().filter(move |c| c.status() == status)
    }
}
