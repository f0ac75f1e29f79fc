//! # Record Store
//!
//! SQLite-backed persistence for student rows.
//!
//! The store is the sole source of truth; no in-memory mirror of the table
//! exists anywhere in the process. Writes are uniqueness-checked: phone
//! uniqueness is enforced by an explicit pre-check, email uniqueness by a
//! hard UNIQUE constraint on the column as a last line of defense.
//!
//! # Invariants
//!
//! - At most one student per phone number
//! - At most one student per email address
//! - IDs are positive; after resequencing they are exactly `1..N`
//!   preserving the previous order

mod errors;
mod resequencer;
mod student;
mod students;

pub use errors::{StoreError, StoreResult};
pub use student::{Student, StudentInput};
pub use students::StudentStore;
