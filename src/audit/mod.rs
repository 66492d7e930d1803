//! Audit logging
//!
//! Every create, update and delete performed through the services is
//! recorded in an append-only JSONL file with before/after snapshots.
//!
//! - `AuditEntry`: one operation on one entity.
//! - `AuditLogger`: appends entries to `audit.log` and reads them back.
//! - `generate_diff`: a one-line summary of the fields an update changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
