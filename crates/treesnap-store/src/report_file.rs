//! Report file persistence
//!
//! Saving is atomic: the encoded report is written to a sibling temp file and
//! renamed over the target, so an interrupted run never leaves a partial
//! report that would later load as valid. Loading is lenient per line.

use crate::atomic::atomic_write;
use crate::errors::{io_error, Result};
use std::fs;
use std::path::Path;
use treesnap_core::codec::{decode_report, encode_report, DecodedReport};
use treesnap_core::Report;

/// True if a report is present at `path`
pub fn report_exists(path: &Path) -> bool {
    path.is_file()
}

/// Write the report atomically
///
/// # Errors
///
/// Returns an `Io` error if the temp file cannot be written or renamed.
pub fn save_report(path: &Path, report: &Report) -> Result<()> {
    let text = encode_report(report);
    atomic_write(path, text.as_bytes())?;
    tracing::debug!(
        report_path = %path.display(),
        file_count = report.len(),
        "report saved"
    );
    Ok(())
}

/// Read and decode a report
///
/// Invalid UTF-8 sequences are replaced rather than rejected; the affected
/// lines then fail to match any on-disk path.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read.
pub fn load_report(path: &Path) -> Result<DecodedReport> {
    let bytes = fs::read(path).map_err(|e| io_error("load_report", path, e))?;
    let decoded = decode_report(&String::from_utf8_lossy(&bytes));

    if !decoded.skipped_lines.is_empty() {
        tracing::debug!(
            report_path = %path.display(),
            skipped = decoded.skipped_lines.len(),
            "report lines skipped"
        );
    }
    Ok(decoded)
}
