//! treesnap Engine - Orchestration layer
//!
//! Coordinates the core Snapshotter/Reconciler with the filesystem store and
//! provides the driver that chooses between them.

pub mod commands;

pub use commands::driver::{run, RunConfig, RunOutcome};
pub use commands::reconcile::reconcile;
pub use commands::snapshot::{snapshot, SnapshotOutcome};
