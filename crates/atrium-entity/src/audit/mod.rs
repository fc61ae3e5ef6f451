//! Audit trail aggregate.

pub mod model;

pub use model::{AuditEntry, CreateAuditEntry};
