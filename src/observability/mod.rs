//! # Observability
//!
//! Audit logging for student mutations. The audit log is append-only and
//! gated by configuration; when disabled it is a no-op.

mod audit;

pub use audit::{AuditAction, AuditLog};
