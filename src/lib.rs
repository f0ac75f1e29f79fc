//! rosterd - a small, self-hostable student roster service
//!
//! CRUD over a single SQLite-backed `students` table, with field-level
//! validation, uniqueness-checked writes, and post-delete ID compaction.

pub mod cli;
pub mod config;
pub mod observability;
pub mod rest_api;
pub mod store;
pub mod validator;
