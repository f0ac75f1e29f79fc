//! # Configuration
//!
//! Environment-driven configuration, read once at process start:
//!
//! - `APP_HEADING` - display heading for the root page
//! - `LOGGING`     - "true" enables the audit log (default off)
//! - `LOG_FILE`    - audit log destination (default "student_actions.log")
//! - `DB_FILE`     - SQLite database path (default "students.db")
//! - `HOST`/`PORT` - HTTP bind address (default 0.0.0.0:8000)
//!
//! CLI flags may override the db path and bind address after the fact.

use std::env;
use std::path::PathBuf;

/// Process configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Heading string served on the root page.
    pub heading: String,
    /// Whether successful mutations are written to the audit log.
    pub logging_enabled: bool,
    /// Audit log destination.
    pub log_file: PathBuf,
    /// SQLite database file.
    pub db_file: PathBuf,
    /// Host to bind the HTTP server to.
    pub host: String,
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            heading: "Student Records".to_string(),
            logging_enabled: false,
            log_file: PathBuf::from("student_actions.log"),
            db_file: PathBuf::from("students.db"),
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl AppConfig {
    /// Builds the config from the process environment, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            heading: env::var("APP_HEADING").unwrap_or(defaults.heading),
            logging_enabled: env::var("LOGGING")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.logging_enabled),
            log_file: env::var("LOG_FILE").map(PathBuf::from).unwrap_or(defaults.log_file),
            db_file: env::var("DB_FILE").map(PathBuf::from).unwrap_or(defaults.db_file),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    /// Socket address string for the HTTP listener.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.heading, "Student Records");
        assert!(!config.logging_enabled);
        assert_eq!(config.db_file, PathBuf::from("students.db"));
        assert_eq!(config.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_socket_addr_formats_host_and_port() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..AppConfig::default()
        };
        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
    }
}
