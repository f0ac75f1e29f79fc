//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterd serve [--db <path>] [--host <host>] [--port <port>]
//! - rosterd resequence [--db <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rosterd - a small, self-hostable student roster service
#[derive(Parser, Debug)]
#[command(name = "rosterd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to the SQLite database (overrides DB_FILE)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Host to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Compact student ids to 1..N and exit
    Resequence {
        /// Path to the SQLite database (overrides DB_FILE)
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_flags() {
        let cli = Cli::parse_from(["rosterd", "serve", "--db", "x.db", "--port", "9000"]);
        match cli.command {
            Command::Serve { db, host, port } => {
                assert_eq!(db, Some(PathBuf::from("x.db")));
                assert_eq!(host, None);
                assert_eq!(port, Some(9000));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_resequence_defaults() {
        let cli = Cli::parse_from(["rosterd", "resequence"]);
        match cli.command {
            Command::Resequence { db } => assert_eq!(db, None),
            _ => panic!("expected resequence"),
        }
    }
}
