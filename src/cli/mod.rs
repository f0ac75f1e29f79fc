//! # CLI
//!
//! Argument parsing and command dispatch for the `rosterd` binary.

pub mod args;
pub mod commands;
pub mod errors;

pub use args::{Cli, Command};
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    commands::dispatch(cli.command)
}
