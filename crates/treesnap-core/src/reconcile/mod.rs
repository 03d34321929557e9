//! Reconciliation of a live tree against a persisted report.
//!
//! Walks the current tree, classifies every compared path into one of five
//! disjoint outcomes, and renders the result for humans.
//!
//! ## Entry point
//!
//! ```ignore
//! use treesnap_core::reconcile::{reconcile, render_human_summary};
//!
//! let result = reconcile(index, &tree, &exclusions)?;
//! println!("{}", render_human_summary(&result));
//! ```
//!
//! ## Guarantees
//!
//! - **Ordered classification**: size is compared before hash; a size
//!   mismatch never triggers hashing.
//! - **Deterministic output**: present files follow enumeration order, missing
//!   files follow key order.
//! - **Untracked attributes**: timestamps and permissions never affect the result.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{classify_present, reconcile};
pub use human_summary::render_human_summary;
pub use model::{FileChange, FileStatus, ReconciliationResult, StatusCounts};
