//! CLI command implementations
//!
//! `serve` resolves configuration (environment first, flags override),
//! opens the store and audit log, and runs the HTTP server on a tokio
//! runtime. `resequence` runs the id-compaction pass once and exits.

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::observability::AuditLog;
use crate::rest_api::ApiServer;
use crate::store::StudentStore;

use super::args::Command;
use super::errors::CliResult;

/// Dispatch a parsed command.
pub fn dispatch(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { db, host, port } => serve(db, host, port),
        Command::Resequence { db } => resequence(db),
    }
}

fn serve(db: Option<PathBuf>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = AppConfig::from_env();
    if let Some(db) = db {
        config.db_file = db;
    }
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let store = StudentStore::open(&config.db_file)?;
    let audit = if config.logging_enabled {
        AuditLog::open(&config.log_file)?
    } else {
        AuditLog::disabled()
    };

    let server = ApiServer::new(config, store, audit);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

fn resequence(db: Option<PathBuf>) -> CliResult<()> {
    let config = AppConfig::from_env();
    let db_file = db.unwrap_or(config.db_file);

    let mut store = StudentStore::open(&db_file)?;
    store.resequence()?;

    println!("Resequenced {}", db_file.display());
    Ok(())
}
