//! Resxcheck: pre-merge brace balance checker for changed localization files.
//!
//! This is the main entry point for the `resxcheck` CLI. It parses arguments,
//! runs the check, and maps errors to the process exit code.

mod cli;
mod commands;
pub mod brackets;
pub mod changeset;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders its own usage, help, and version text.
            let _ = err.print();
            return ExitCode::from(cli::parse_error_exit_code(&err) as u8);
        }
    };

    match commands::run_check(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
