//! Reconciliation engine.
//!
//! The core entry point is [`reconcile`], which consumes a loaded
//! [`ReportIndex`] and walks a [`TreeSource`] against it.

use crate::errors::Result;
use crate::hashing::ContentHash;
use crate::model::{RecordedFile, ReportIndex};
use crate::paths::{path_key, Exclusions};
use crate::reconcile::model::{FileChange, ReconciliationResult};
use crate::tree::{TreeEntry, TreeSource};

/// Classify a file present both on disk and in the report.
///
/// Size is compared first; `current_hash` is only invoked when sizes agree.
/// Returns `None` for a match.
///
/// # Errors
///
/// Propagates the error from `current_hash`.
pub fn classify_present<F>(
    display_path: &str,
    recorded: RecordedFile,
    current_size: u64,
    current_hash: F,
) -> Result<Option<FileChange>>
where
    F: FnOnce() -> Result<ContentHash>,
{
    if recorded.size_bytes != current_size {
        return Ok(Some(FileChange::SizeMismatch {
            path: display_path.to_string(),
            report_size: recorded.size_bytes,
            current_size,
        }));
    }

    let current = current_hash()?;
    if current == recorded.content_hash {
        Ok(None)
    } else {
        Ok(Some(FileChange::HashMismatch {
            path: display_path.to_string(),
            size: current_size,
            report_hash: recorded.content_hash,
            current_hash: current,
        }))
    }
}

/// Diff a live tree against a loaded report.
///
/// Every present, non-excluded file is looked up by path key and removed from
/// the index once accounted for; whatever remains is missing. Two on-disk files
/// whose paths differ only in case share one key: the first claims the report
/// entry, the second is reported as new.
///
/// # Errors
///
/// Fails if the tree cannot be enumerated or a file cannot be hashed.
pub fn reconcile(
    mut index: ReportIndex,
    source: &dyn TreeSource,
    exclusions: &Exclusions,
) -> Result<ReconciliationResult> {
    let mut result = ReconciliationResult::default();

    for entry in source.entries()? {
        if exclusions.is_excluded(&entry.file_name) {
            continue;
        }

        let key = path_key(&entry.relative_path);
        match index.take(&key) {
            Some(recorded) => {
                let outcome =
                    classify_present(&entry.relative_path, recorded, entry.size_bytes, || {
                        source.content_hash(&entry)
                    })?;
                match outcome {
                    Some(change) => result.record_change(change),
                    None => result.record_match(),
                }
            }
            None => result.record_change(new_in_folder(&entry)),
        }
    }

    for (key, recorded) in index {
        result.record_change(FileChange::MissingFromReport {
            path: key,
            report_size: recorded.size_bytes,
            report_hash: recorded.content_hash,
        });
    }

    Ok(result)
}

fn new_in_folder(entry: &TreeEntry) -> FileChange {
    FileChange::NewInFolder {
        path: entry.relative_path.clone(),
        size: entry.size_bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TreeSnapError;
    use crate::hashing::hash_bytes;

    fn recorded(size: u64, content: &[u8]) -> RecordedFile {
        RecordedFile {
            size_bytes: size,
            content_hash: hash_bytes(content),
        }
    }

    #[test]
    fn test_size_mismatch_never_hashes() {
        let outcome = classify_present("a.txt", recorded(5, b"hello"), 6, || {
            panic!("hash must not be computed on size mismatch")
        })
        .unwrap();

        assert!(matches!(
            outcome,
            Some(FileChange::SizeMismatch {
                report_size: 5,
                current_size: 6,
                ..
            })
        ));
    }

    #[test]
    fn test_same_size_different_content_is_hash_mismatch() {
        let outcome =
            classify_present("a.txt", recorded(5, b"hello"), 5, || Ok(hash_bytes(b"HELLO")))
                .unwrap();

        match outcome {
            Some(FileChange::HashMismatch {
                path,
                size,
                report_hash,
                current_hash,
            }) => {
                assert_eq!(path, "a.txt");
                assert_eq!(size, 5);
                assert_eq!(report_hash, hash_bytes(b"hello"));
                assert_eq!(current_hash, hash_bytes(b"HELLO"));
            }
            other => panic!("expected HashMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_identical_is_match() {
        let outcome =
            classify_present("a.txt", recorded(5, b"hello"), 5, || Ok(hash_bytes(b"hello")))
                .unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn test_hash_failure_propagates() {
        let err = classify_present("a.txt", recorded(5, b"hello"), 5, || {
            Err(TreeSnapError::Internal {
                message: "locked".to_string(),
            })
        })
        .unwrap_err();
        assert!(matches!(err, TreeSnapError::Internal { .. }));
    }
}
