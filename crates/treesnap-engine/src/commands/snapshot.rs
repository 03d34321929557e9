//! Snapshot command: walk a tree and persist its report.

use super::exclusions_for;
use std::path::{Path, PathBuf};
use std::time::Instant;
use treesnap_core::errors::ExError;
use treesnap_core::{log_op_end, log_op_error, log_op_start, take_snapshot};
use treesnap_store::{save_report, FsTree};

/// Result of a completed snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotOutcome {
    pub report_path: PathBuf,
    /// Number of records written
    pub file_count: usize,
}

/// Snapshot `root` into `report_path`.
///
/// The report's own filename and `exclude_filename` are both skipped.
/// An existing report at `report_path` is replaced atomically; deciding
/// whether to snapshot at all is the caller's job.
///
/// # Errors
///
/// Returns an `Io`/`NotFound`/`InvalidInput` error if the tree cannot be read
/// or the report cannot be written.
pub fn snapshot(
    root: &Path,
    report_path: &Path,
    exclude_filename: Option<&str>,
) -> Result<SnapshotOutcome, ExError> {
    log_op_start!(
        "snapshot",
        root = %root.display(),
        report_path = %report_path.display()
    );
    let start = Instant::now();

    let result = snapshot_impl(root, report_path, exclude_filename).map_err(|e| {
        log_op_error!(
            "snapshot",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "snapshot",
        duration_ms = start.elapsed().as_millis() as u64,
        file_count = result.file_count as u64
    );

    Ok(result)
}

fn snapshot_impl(
    root: &Path,
    report_path: &Path,
    exclude_filename: Option<&str>,
) -> Result<SnapshotOutcome, ExError> {
    let exclusions = exclusions_for(report_path, exclude_filename);
    let tree = FsTree::new(root);

    let report = take_snapshot(&tree, &exclusions)?;
    save_report(report_path, &report)?;

    Ok(SnapshotOutcome {
        report_path: report_path.to_path_buf(),
        file_count: report.len(),
    })
}
