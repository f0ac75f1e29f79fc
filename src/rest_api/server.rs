//! # REST API HTTP Server
//!
//! Axum-based HTTP server for the student endpoints.
//!
//! Requests are handled start-to-finish against the store: the single
//! `Mutex` around the connection serializes every operation, which is
//! what makes the post-delete resequencing pass safe to run.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::observability::{AuditAction, AuditLog};
use crate::store::{Student, StudentInput, StudentStore};
use crate::validator;

use super::errors::{ApiError, ApiResult};
use super::response::{ActionResponse, IndexResponse};

/// Shared server state: the store behind the global write lock, the audit
/// log, and the display heading.
pub struct AppState {
    store: Mutex<StudentStore>,
    audit: AuditLog,
    heading: String,
}

impl AppState {
    fn lock_store(&self) -> ApiResult<MutexGuard<'_, StudentStore>> {
        self.store
            .lock()
            .map_err(|_| ApiError::Internal("store lock poisoned".to_string()))
    }
}

/// REST API server
pub struct ApiServer {
    config: AppConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(config: AppConfig, store: StudentStore, audit: AuditLog) -> Self {
        let state = Arc::new(AppState {
            store: Mutex::new(store),
            audit,
            heading: config.heading.clone(),
        });
        Self { config, state }
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
            .route("/api/students", post(create_handler))
            .route("/api/students", get(list_handler))
            .route("/api/students/:id", put(update_handler))
            .route("/api/students/:id", delete(delete_handler))
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("bind address: {}", e))
        })?;

        println!("Starting rosterd on {}", addr);
        println!("Health check: http://{}/health", addr);
        println!("API endpoint: http://{}/api/students", addr);

        let router = self.router();
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

/// Shared state type
type ServerState = Arc<AppState>;

async fn index_handler(State(state): State<ServerState>) -> Json<IndexResponse> {
    Json(IndexResponse {
        heading: state.heading.clone(),
    })
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

/// Create handler: validate, then insert
///
/// The body is taken as a rejection-aware extractor: a malformed or
/// missing body maps to the 400 `["Invalid JSON"]` contract rather than
/// the extractor's own plain-text rejection. Absent fields deserialize
/// as empty strings and fall through to the validator.
async fn create_handler(
    State(state): State<ServerState>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> ApiResult<Json<ActionResponse>> {
    let Json(input) = payload.map_err(|_| ApiError::InvalidBody)?;
    let errors = validator::validate(&input);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let store = state.lock_store()?;
    store.insert(&input)?;
    state.audit.record(AuditAction::StudentAdded, &input.audit_fields());

    Ok(Json(ActionResponse::registered()))
}

/// List handler: bare array, phone column aliased
async fn list_handler(State(state): State<ServerState>) -> ApiResult<Json<Vec<Student>>> {
    let store = state.lock_store()?;
    Ok(Json(store.list()?))
}

/// Update handler: validate, then full-field overwrite
async fn update_handler(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> ApiResult<Json<ActionResponse>> {
    let Json(input) = payload.map_err(|_| ApiError::InvalidBody)?;
    let errors = validator::validate(&input);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let store = state.lock_store()?;
    store.update(id, &input)?;

    let mut fields = input.audit_fields();
    fields["id"] = json!(id);
    state.audit.record(AuditAction::StudentUpdated, &fields);

    Ok(Json(ActionResponse::updated()))
}

/// Delete handler: remove the row, then compact ids best-effort
async fn delete_handler(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ActionResponse>> {
    let mut store = state.lock_store()?;
    store.delete(id)?;
    state.audit.record(AuditAction::StudentDeleted, &json!({ "id": id }));

    // Best-effort: a resequencing failure must not undo the delete.
    if let Err(e) = store.resequence() {
        eprintln!("resequence after delete failed: {}", e);
    }

    Ok(Json(ActionResponse::deleted()))
}
