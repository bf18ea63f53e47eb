//! Audit trail for mutations
//!
//! Services append an [`AuditEntry`] for every period or transaction they
//! create, update, delete or promote, when an [`AuditLogger`] is attached.
//! The log is line-delimited JSON, one entry per line.

mod entry;
mod logger;

pub use entry::{AuditEntry, Audited, EntityType, Operation};
pub use logger::AuditLogger;
