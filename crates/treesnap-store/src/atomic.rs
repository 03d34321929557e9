//! Atomic write primitives
//!
//! Uses temp→rename so a crash never leaves a truncated report behind. The
//! temp file gets a fresh random name matching the report's exclusion pattern,
//! so a leftover from a crash is never scanned.

use crate::errors::{io_error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use treesnap_core::paths::{report_temp_prefix, REPORT_TEMP_SUFFIX};

/// Fresh temp file beside `target_path`, named `.<target>.<random>.tmp`.
///
/// Created exclusively, so an existing file is never reused or clobbered.
pub(crate) fn create_temp_for(target_path: &Path) -> Result<NamedTempFile> {
    let dir = match target_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let target_name = target_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Builder::new()
        .prefix(&report_temp_prefix(&target_name))
        .suffix(REPORT_TEMP_SUFFIX)
        .tempfile_in(dir)
        .map_err(|e| io_error("create_report_temp", dir, e))
}

/// Atomically write bytes to a file
///
/// The temp file is removed on any failure before the rename.
pub(crate) fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_report_dir", parent, e))?;
        }
    }

    let mut temp = create_temp_for(target_path)?;
    if let Err(e) = temp.write_all(content).and_then(|()| temp.flush()) {
        return Err(io_error("write_report_temp", temp.path(), e));
    }

    temp.persist(target_path)
        .map_err(|e| io_error("rename_report_temp", target_path, e.error))?;

    Ok(())
}
