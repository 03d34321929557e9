//! The seam between the domain and the filesystem.
//!
//! The Snapshotter and the Reconciler only see a [`TreeSource`]. Enumeration
//! reports sizes from metadata; hashing is a separate on-demand call so the
//! Reconciler can skip it when sizes already differ.

use crate::errors::Result;
use crate::hashing::ContentHash;
use std::path::PathBuf;

/// A regular file discovered under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Root-relative display path (original case, host separator)
    pub relative_path: String,
    /// Bare filename, used for exclusion matching
    pub file_name: String,
    /// Byte length from metadata
    pub size_bytes: u64,
    /// Where the source can find the content again
    pub location: PathBuf,
}

/// A walkable tree of files.
pub trait TreeSource {
    /// All regular files, recursively, in a deterministic order.
    ///
    /// # Errors
    ///
    /// Fails if the root or any directory below it cannot be read.
    fn entries(&self) -> Result<Vec<TreeEntry>>;

    /// Stream the entry's content through SHA-256.
    ///
    /// # Errors
    ///
    /// Fails if the file vanished or became unreadable since enumeration.
    fn content_hash(&self, entry: &TreeEntry) -> Result<ContentHash>;
}
