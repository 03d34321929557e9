//! Error handling for treesnap-store
//!
//! Wraps treesnap-core errors with store-specific helpers

use std::path::Path;
use treesnap_core::errors::TreeSnapError;

pub use treesnap_core::errors::Result;

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> TreeSnapError {
    TreeSnapError::io(operation, path, err)
}

/// Create an IO error from a failed directory walk
pub fn walk_error(root: &Path, err: walkdir::Error) -> TreeSnapError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    TreeSnapError::Io {
        op: "walk_tree".to_string(),
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
