//! Reconcile command: diff a live tree against a persisted report.

use super::exclusions_for;
use std::path::Path;
use std::time::Instant;
use treesnap_core::errors::ExError;
use treesnap_core::reconcile::ReconciliationResult;
use treesnap_core::{log_op_end, log_op_error, log_op_start};
use treesnap_store::{load_report, FsTree};

/// Reconcile `root` against the report at `report_path`.
///
/// Malformed report lines are skipped silently; the report file itself and
/// `exclude_filename` are never compared.
///
/// # Errors
///
/// Returns an `Io` error if the report cannot be read, or any tree error.
pub fn reconcile(
    root: &Path,
    report_path: &Path,
    exclude_filename: Option<&str>,
) -> Result<ReconciliationResult, ExError> {
    log_op_start!(
        "reconcile",
        root = %root.display(),
        report_path = %report_path.display()
    );
    let start = Instant::now();

    let result = reconcile_impl(root, report_path, exclude_filename).map_err(|e| {
        log_op_error!(
            "reconcile",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    let counts = result.counts;
    log_op_end!(
        "reconcile",
        duration_ms = start.elapsed().as_millis() as u64,
        matched = counts.matched as u64,
        size_mismatch = counts.size_mismatch as u64,
        hash_mismatch = counts.hash_mismatch as u64,
        new_in_folder = counts.new_in_folder as u64,
        missing_from_report = counts.missing_from_report as u64
    );

    Ok(result)
}

fn reconcile_impl(
    root: &Path,
    report_path: &Path,
    exclude_filename: Option<&str>,
) -> Result<ReconciliationResult, ExError> {
    let decoded = load_report(report_path)?;
    let exclusions = exclusions_for(report_path, exclude_filename);
    let tree = FsTree::new(root);

    Ok(treesnap_core::reconcile(decoded.index, &tree, &exclusions)?)
}
