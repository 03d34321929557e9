//! treesnap Store - filesystem access
//!
//! Provides:
//! - `FsTree`: recursive walk and streaming file hashing behind `TreeSource`
//! - Report persistence with atomic temp→rename writes and lenient loading

pub mod errors;
pub mod fs_tree;
pub mod report_file;

mod atomic;

pub use fs_tree::FsTree;
pub use report_file::{load_report, report_exists, save_report};
