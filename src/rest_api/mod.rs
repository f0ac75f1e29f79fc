//! # rosterd REST API Module
//!
//! Axum HTTP surface for the student roster: create, list, update, and
//! delete, translating typed core results into status codes and the
//! `{success, errors}` body shape.

pub mod errors;
pub mod response;
pub mod server;

pub use errors::{ApiError, ApiResult};
pub use response::ActionResponse;
pub use server::ApiServer;
