//! Path canonicalization and the name-based exclusion rule.
//!
//! A file is identified by its root-relative path. The display form keeps
//! the on-disk casing; the path key used for comparison is its lowercased form.

use std::path::{Component, Path, MAIN_SEPARATOR_STR};

/// Fixed name of the persisted report. Always excluded from scans.
pub const DEFAULT_REPORT_FILE_NAME: &str = "CompareVersions.txt";

/// Suffix of the in-flight temp file used while saving a report.
pub const REPORT_TEMP_SUFFIX: &str = ".tmp";

/// Prefix of the in-flight temp file for a report named `report_file_name`.
///
/// The full temp name is `.<report>.<random>.tmp`, never the bare
/// `<report>.tmp`, so it cannot collide with a user file of that name.
pub fn report_temp_prefix(report_file_name: &str) -> String {
    format!(".{report_file_name}.")
}

/// Root-relative display path of `path`, joined with the host separator.
///
/// Returns `None` when `path` is not under `root` or is `root` itself.
pub fn relative_display_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        return None;
    }
    Some(parts.join(MAIN_SEPARATOR_STR))
}

/// Comparison key for a display path.
pub fn path_key(display_path: &str) -> String {
    display_path.to_lowercase()
}

/// Filenames skipped by both the Snapshotter and the Reconciler.
///
/// Matching is by bare filename, case-insensitive, at any depth. An unrelated
/// file that happens to share one of these names is skipped too. Temp files
/// left by an interrupted report save (see [`report_temp_prefix`]) are
/// skipped as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusions {
    report_file_name: String,
    report_temp_prefix: String,
    self_file_name: Option<String>,
}

impl Exclusions {
    pub fn new(report_file_name: impl Into<String>, self_file_name: Option<String>) -> Self {
        let report_file_name = report_file_name.into().to_lowercase();
        Self {
            report_temp_prefix: report_temp_prefix(&report_file_name),
            report_file_name,
            self_file_name: self_file_name.map(|name| name.to_lowercase()),
        }
    }

    /// True when `file_name` matches the report name, the self name, or the
    /// report's temp name pattern.
    pub fn is_excluded(&self, file_name: &str) -> bool {
        let candidate = file_name.to_lowercase();
        candidate == self.report_file_name
            || self.self_file_name.as_deref() == Some(candidate.as_str())
            || self.is_report_temp(&candidate)
    }

    fn is_report_temp(&self, candidate: &str) -> bool {
        candidate.len() > self.report_temp_prefix.len() + REPORT_TEMP_SUFFIX.len()
            && candidate.starts_with(&self.report_temp_prefix)
            && candidate.ends_with(REPORT_TEMP_SUFFIX)
    }
}

impl Default for Exclusions {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_FILE_NAME, None)
    }
}
