//! Core types shared across treesnap facilities
//!
//! This crate provides the canonical schema constants used by the logging
//! facility and by every crate that emits structured events:
//!
//! - **Field keys**: component, op, event, duration and domain fields
//! - **Event names**: start, end, end_error

pub mod schema;
