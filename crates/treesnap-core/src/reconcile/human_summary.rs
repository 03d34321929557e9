//! Human-readable renderer for reconciliation results.

use crate::reconcile::model::{FileChange, ReconciliationResult};
use std::fmt::Write as _;

/// Render the console report: one block per non-matched file, then the
/// five summary counts.
pub fn render_human_summary(result: &ReconciliationResult) -> String {
    let mut out = String::new();

    out.push_str("=== Full File Comparison Report ===\n\n");

    for change in &result.entries {
        render_change(&mut out, change);
    }

    let c = &result.counts;
    out.push_str("=== Summary ===\n");
    let _ = writeln!(out, "Total Matched Files: {}", c.matched);
    let _ = writeln!(out, "Total Size Mismatches: {}", c.size_mismatch);
    let _ = writeln!(out, "Total Hash Mismatches: {}", c.hash_mismatch);
    let _ = writeln!(
        out,
        "Total New Files (Found in folder but not in report): {}",
        c.new_in_folder
    );
    let _ = writeln!(
        out,
        "Total Missing Files (Found in report but not in folder): {}",
        c.missing_from_report
    );
    out.push_str("\n=== End of Report ===\n");

    out
}

fn render_change(out: &mut String, change: &FileChange) {
    let _ = writeln!(out, "File: {}", change.path());
    let _ = match change {
        FileChange::SizeMismatch {
            report_size,
            current_size,
            ..
        } => writeln!(
            out,
            "  Status: Size Mismatch\n  Report Size: {} bytes\n  Current Size: {} bytes",
            report_size, current_size
        ),
        FileChange::HashMismatch {
            size,
            report_hash,
            current_hash,
            ..
        } => writeln!(
            out,
            "  Status: Hash Mismatch\n  Size: {} bytes\n  Report Hash: {}\n  Current Hash: {}",
            size, report_hash, current_hash
        ),
        FileChange::NewInFolder { size, .. } => writeln!(
            out,
            "  Status: New File (Found in folder but not in report)\n  Size: {} bytes",
            size
        ),
        FileChange::MissingFromReport {
            report_size,
            report_hash,
            ..
        } => writeln!(
            out,
            "  Status: Missing (Found in report but not in folder)\n  Report Size: {} bytes\n  Report Hash: {}",
            report_size, report_hash
        ),
    };
    out.push('\n');
}
