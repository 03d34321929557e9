//! Driver: snapshot when no report exists, reconcile otherwise.

use super::reconcile::reconcile;
use super::snapshot::{snapshot, SnapshotOutcome};
use std::path::PathBuf;
use std::time::Instant;
use treesnap_core::errors::{ExError, ExErrorKind};
use treesnap_core::reconcile::ReconciliationResult;
use treesnap_core::{log_op_end, log_op_error, log_op_start, DEFAULT_REPORT_FILE_NAME};
use treesnap_store::report_exists;

/// Where to look and what to skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory to scan; the report lives directly inside it
    pub root: PathBuf,
    /// Report filename, also always excluded from scans
    pub report_file_name: String,
    /// Filename of the running tool, excluded by name at any depth
    pub exclude_filename: Option<String>,
}

impl RunConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            report_file_name: DEFAULT_REPORT_FILE_NAME.to_string(),
            exclude_filename: None,
        }
    }

    /// Root = directory of the running executable, exclusion = its filename.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the executable path cannot be resolved.
    pub fn for_executable() -> Result<Self, ExError> {
        let exe = std::env::current_exe().map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("locate_executable")
                .with_message(e.to_string())
        })?;
        let root = exe.parent().map(PathBuf::from).ok_or_else(|| {
            ExError::new(ExErrorKind::Internal)
                .with_op("locate_executable")
                .with_path(exe.display().to_string())
                .with_message("executable has no parent directory")
        })?;
        let exclude_filename = exe
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        Ok(Self {
            root,
            report_file_name: DEFAULT_REPORT_FILE_NAME.to_string(),
            exclude_filename,
        })
    }

    pub fn with_report_file_name(mut self, name: impl Into<String>) -> Self {
        self.report_file_name = name.into();
        self
    }

    pub fn with_exclude_filename(mut self, name: Option<String>) -> Self {
        self.exclude_filename = name;
        self
    }

    pub fn report_path(&self) -> PathBuf {
        self.root.join(&self.report_file_name)
    }
}

/// What the driver did.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// No report existed; one was created
    Created(SnapshotOutcome),
    /// A report existed and the tree was compared against it
    Compared(ReconciliationResult),
}

/// Run one snapshot-or-reconcile cycle.
///
/// Never modifies an existing report: regenerating requires removing it first.
///
/// # Errors
///
/// Propagates the error of whichever command ran.
pub fn run(config: &RunConfig) -> Result<RunOutcome, ExError> {
    let report_path = config.report_path();
    let exists = report_exists(&report_path);
    log_op_start!("run", root = %config.root.display(), report_exists = exists);
    let start = Instant::now();

    let exclude = config.exclude_filename.as_deref();
    let outcome = if exists {
        reconcile(&config.root, &report_path, exclude).map(RunOutcome::Compared)
    } else {
        snapshot(&config.root, &report_path, exclude).map(RunOutcome::Created)
    };

    match outcome {
        Ok(outcome) => {
            log_op_end!("run", duration_ms = start.elapsed().as_millis() as u64);
            Ok(outcome)
        }
        Err(e) => {
            log_op_error!(
                "run",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_path_is_inside_root() {
        let config = RunConfig::new("/data").with_report_file_name("r.txt");
        assert_eq!(config.report_path(), PathBuf::from("/data/r.txt"));
    }

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("/data");
        assert_eq!(config.report_file_name, DEFAULT_REPORT_FILE_NAME);
        assert_eq!(config.exclude_filename, None);
    }

    #[test]
    fn test_for_executable_excludes_own_name() {
        let config = RunConfig::for_executable().unwrap();
        let exe = std::env::current_exe().unwrap();

        assert_eq!(config.root, exe.parent().unwrap());
        assert_eq!(
            config.exclude_filename.as_deref(),
            exe.file_name().and_then(|n| n.to_str())
        );
    }
}
