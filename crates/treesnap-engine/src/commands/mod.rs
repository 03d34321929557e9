//! Engine commands.
//!
//! Every public command follows the same logging contract:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success, with `duration_ms` and counts
//! - `log_op_error!` on failure, then the error is returned

pub mod driver;
pub mod reconcile;
pub mod snapshot;

use std::path::Path;
use treesnap_core::Exclusions;
use treesnap_core::DEFAULT_REPORT_FILE_NAME;

/// Exclusions for a run: the report's own filename (and its save temp files)
/// plus the optional self name.
pub(crate) fn exclusions_for(report_path: &Path, exclude_filename: Option<&str>) -> Exclusions {
    let report_name = report_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_REPORT_FILE_NAME.to_string());
    Exclusions::new(report_name, exclude_filename.map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusions_use_report_file_name() {
        let exclusions = exclusions_for(Path::new("/data/custom.txt"), Some("tool"));
        assert!(exclusions.is_excluded("CUSTOM.txt"));
        assert!(exclusions.is_excluded("tool"));
        assert!(!exclusions.is_excluded(DEFAULT_REPORT_FILE_NAME));
    }

    #[test]
    fn test_exclusions_cover_report_save_temp_files() {
        let exclusions = exclusions_for(Path::new("/data/custom.txt"), None);
        assert!(exclusions.is_excluded(".custom.txt.q8Rt0z.tmp"));
        assert!(!exclusions.is_excluded("custom.txt.tmp"));
    }
}
