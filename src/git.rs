//! Git command runner for resxcheck.
//!
//! Every git interaction (head resolution, fetch, diff) shells out through
//! this module so exit status and stderr are handled in one place.

use crate::error::{ResxCheckError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Captured output of a git command that exited 0.
///
/// Both streams are trimmed; ref names and name-only diff output never carry
/// meaningful surrounding whitespace.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Trimmed standard output.
    pub stdout: String,
    /// Trimmed standard error.
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Run a git command in the given repository directory.
///
/// `args` are the arguments after the `git` binary name. A spawn failure or
/// a non-zero exit becomes a `GitError` carrying whichever of stderr/stdout
/// has the underlying cause.
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            ResxCheckError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(ResxCheckError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Verify that `repo_path` points inside a git repository.
///
/// Runs `git rev-parse --git-dir` at the given path. A failure here is a
/// clean user error (wrong path on the command line), not a git error.
///
/// # Arguments
///
/// * `repo_path` - The repository path supplied by the user
///
/// # Returns
///
/// * `Ok(())` - The path is inside a git repository
/// * `Err(ResxCheckError::UserError)` - The path does not exist or is not a repository
pub fn ensure_repository<P: AsRef<Path>>(repo_path: P) -> Result<()> {
    let repo_path = repo_path.as_ref();

    if !repo_path.is_dir() {
        return Err(ResxCheckError::UserError(format!(
            "repository path does not exist or is not a directory: {}",
            repo_path.display()
        )));
    }

    let output = Command::new("git")
        .current_dir(repo_path)
        .args(["rev-parse", "--git-dir"])
        .output()
        .map_err(|e| {
            ResxCheckError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(ResxCheckError::UserError(format!(
            "not a git repository: {}",
            repo_path.display()
        )))
    }
}
