//! Snapshotter.
//!
//! Records size and content hash for every eligible file of a tree, in the
//! source's enumeration order.

use crate::codec::FIELD_SEPARATOR;
use crate::errors::Result;
use crate::model::{FileRecord, Report};
use crate::paths::Exclusions;
use crate::tree::TreeSource;

/// Take a snapshot of `source`.
///
/// Excluded filenames are skipped before any hashing happens.
///
/// # Errors
///
/// Fails if the tree cannot be enumerated or any file cannot be hashed.
pub fn take_snapshot(source: &dyn TreeSource, exclusions: &Exclusions) -> Result<Report> {
    let mut records = Vec::new();

    for entry in source.entries()? {
        if exclusions.is_excluded(&entry.file_name) {
            tracing::debug!(path = %entry.relative_path, "excluded from snapshot");
            continue;
        }
        if entry.relative_path.contains(FIELD_SEPARATOR) {
            tracing::warn!(
                path = %entry.relative_path,
                "path contains the report field separator and will not load back"
            );
        }

        let content_hash = source.content_hash(&entry)?;
        records.push(FileRecord {
            relative_path: entry.relative_path,
            size_bytes: entry.size_bytes,
            content_hash,
        });
    }

    Ok(Report { records })
}
