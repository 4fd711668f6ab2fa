//! Check orchestration for resxcheck.
//!
//! Wires the changeset resolver to the bracket checker: resolve HEAD, fetch
//! both branches, list changed files of the target extension, then validate
//! and report every file. Files are validated independently; an early failure
//! never short-circuits the remaining files.
//!
//! Verdict lines go through an injected writer (stdout in `main`) so the
//! reported wording is testable.

use crate::brackets::{self, BracketReport, UnmatchedKind};
use crate::changeset;
use crate::cli::Cli;
use crate::error::{ResxCheckError, Result};
use crate::fs;
use crate::git;
use std::io::Write;
use std::path::Path;

/// Run the full pre-merge check described by the CLI arguments.
///
/// # Returns
///
/// * `Ok(())` - No relevant files changed, or every changed file is balanced
/// * `Err(ResxCheckError::UserError)` - Bad repository path or unreadable file
/// * `Err(ResxCheckError::GitError)` - Fetch, head-resolution, or diff failure
/// * `Err(ResxCheckError::ValidationError)` - At least one file has unmatched brackets
pub fn run_check(cli: &Cli) -> Result<()> {
    run_check_with_output(cli, &mut std::io::stdout().lock())
}

fn run_check_with_output<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    git::ensure_repository(&cli.repo_path)?;

    let head = changeset::resolve_head(&cli.repo_path)?;
    changeset::fetch_branches(&cli.repo_path, &cli.remote, &cli.source_branch, &head)?;
    let files = changeset::changed_files(
        &cli.repo_path,
        &cli.remote,
        &cli.source_branch,
        &head,
        &cli.extension,
    )?;

    if files.is_empty() {
        emit(out, format!("No {} files changed.", cli.extension))?;
        return Ok(());
    }

    let mut failed = 0usize;
    for path in &files {
        if !check_file(out, &cli.repo_path, path)? {
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(ResxCheckError::ValidationError(format!(
            "{} of {} changed {} file(s) contain unmatched brackets",
            failed,
            files.len(),
            cli.extension
        )));
    }

    Ok(())
}

/// Validate one changed file and report its verdict.
///
/// Returns `Ok(true)` if the file is balanced, `Ok(false)` if diagnostics
/// were reported, and an error only if the file could not be read.
fn check_file<W: Write>(out: &mut W, repo_root: &Path, rel_path: &str) -> Result<bool> {
    let content = fs::read_file_text(repo_root.join(rel_path))?;

    match brackets::check_brackets(&content) {
        BracketReport::Valid => {
            emit(
                out,
                format!("All brackets are properly closed in file {}.", rel_path),
            )?;
            Ok(true)
        }
        BracketReport::Invalid(diagnostics) => {
            for diagnostic in &diagnostics {
                let side = match diagnostic.kind {
                    UnmatchedKind::Opening => "opening",
                    UnmatchedKind::Closing => "closing",
                };
                emit(
                    out,
                    format!(
                        "Unmatched {} bracket at position {} in file {}",
                        side, diagnostic.offset, rel_path
                    ),
                )?;
            }
            emit(out, format!("Bracket validation failed for file {}", rel_path))?;
            Ok(false)
        }
    }
}

fn emit<W: Write>(out: &mut W, line: String) -> Result<()> {
    writeln!(out, "{}", line)
        .map_err(|e| ResxCheckError::UserError(format!("failed to write output: {}", e)))
}
