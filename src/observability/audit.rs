//! Audit logging for student mutations
//!
//! Every successful insert, update, and delete is recorded as one line in
//! an append-only log file:
//!
//! ```text
//! 2026-08-29T12:00:00+00:00 | INFO | Student added: {"first_name":"Ann",...}
//! ```
//!
//! Writes are flushed per line. Audit failures are never allowed to fail
//! the mutation that triggered them; a write error is noted on stderr and
//! the operation proceeds.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use serde_json::Value;

/// Audited mutation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    /// A new student row was inserted.
    StudentAdded,
    /// An existing row was fully overwritten.
    StudentUpdated,
    /// A row was removed.
    StudentDeleted,
}

impl AuditAction {
    /// Returns the event name used in the log line.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::StudentAdded => "Student added",
            AuditAction::StudentUpdated => "Student updated",
            AuditAction::StudentDeleted => "Student deleted",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Append-only audit log, or a no-op when logging is disabled.
pub struct AuditLog {
    writer: Option<Mutex<BufWriter<std::fs::File>>>,
}

impl AuditLog {
    /// Opens (or creates) the audit file at `path`, appending.
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(Mutex::new(BufWriter::new(file))),
        })
    }

    /// A log that discards every record (logging disabled in config).
    pub fn disabled() -> Self {
        Self { writer: None }
    }

    /// True when records are actually persisted.
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Records one mutation with the field values written.
    ///
    /// Non-fatal on failure: a poisoned lock or I/O error is reported to
    /// stderr and otherwise ignored.
    pub fn record(&self, action: AuditAction, fields: &Value) {
        let Some(writer) = &self.writer else {
            return;
        };

        let line = format!("{} | INFO | {}: {}\n", Local::now().to_rfc3339(), action, fields);

        match writer.lock() {
            Ok(mut w) => {
                if let Err(e) = w.write_all(line.as_bytes()).and_then(|_| w.flush()) {
                    eprintln!("audit log write failed: {}", e);
                }
            }
            Err(_) => eprintln!("audit log lock poisoned; record dropped"),
        }
    }
}
