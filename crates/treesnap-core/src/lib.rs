//! treesnap Core - directory snapshot and reconciliation kernel
//!
//! This crate provides the pure domain logic for treesnap:
//! - File records, path keys and the name-based exclusion rule
//! - Streaming SHA-256 content hashing
//! - The line-oriented report codec
//! - The Snapshotter and the Reconciler, both driven through [`tree::TreeSource`]
//! - The structured reconciliation result and its human-readable renderer
//!
//! Filesystem access lives in `treesnap-store`; orchestration in `treesnap-engine`.

pub mod codec;
pub mod errors;
pub mod hashing;
pub mod logging_facility;
pub mod model;
pub mod paths;
pub mod reconcile;
pub mod snapshot;
pub mod tree;

// Used by the logging macros so callers need no direct dependency.
pub use treesnap_core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, TreeSnapError};
pub use hashing::ContentHash;
pub use model::{FileRecord, RecordedFile, Report, ReportIndex};
pub use paths::{Exclusions, DEFAULT_REPORT_FILE_NAME};
pub use reconcile::{reconcile, render_human_summary, ReconciliationResult};
pub use snapshot::take_snapshot;
pub use tree::{TreeEntry, TreeSource};
