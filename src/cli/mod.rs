//! CLI argument parsing for resxcheck.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The actual check implementation lives in the `commands` module.

use crate::exit_codes;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

/// Resxcheck: pre-merge brace balance checker for changed localization files.
///
/// Determines which resource files changed between the currently checked-out
/// branch and a source branch, then validates that every `{` in each changed
/// file has a matching `}` under strict nesting.
#[derive(Parser, Debug)]
#[command(name = "resxcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the git repository to inspect.
    pub repo_path: PathBuf,

    /// Source branch the changes will merge into.
    #[arg(default_value = "main")]
    pub source_branch: String,

    /// File suffix to validate.
    #[arg(long, default_value = ".resx")]
    pub extension: String,

    /// Remote used to refresh both branches before diffing.
    #[arg(long, default_value = "origin")]
    pub remote: String,
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// Returns the parse error instead of exiting so `main` controls the
    /// exit code: missing or invalid arguments must exit 1, not clap's
    /// default 2.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }
}

/// Exit code for a failed argument parse.
///
/// Help and version requests surface as clap "errors" but are successful
/// exits; everything else is a usage error.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
        _ => exit_codes::FAILURE,
    }
}
