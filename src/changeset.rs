//! Changed-file discovery between the checked-out ref and a source branch.
//!
//! All git access goes through the runner in [`crate::git`]; the repository
//! root is passed explicitly into every operation so there is no ambient
//! working-directory state. Discovery is three steps:
//!
//! 1. Resolve what HEAD points at ([`resolve_head`]), with a detached-HEAD
//!    fallback chain.
//! 2. Fetch the source branch (and the current branch, when it has a name)
//!    from the remote so the diff sees up-to-date history ([`fetch_branches`]).
//! 3. Compute a three-dot name-only diff and filter it to one file extension
//!    ([`changed_files`]).

use crate::error::{ResxCheckError, Result};
use crate::git::run_git;
use std::path::Path;

/// What HEAD resolved to, tagged by which fallback step produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadRef {
    /// A named local branch (`git symbolic-ref --short HEAD`).
    Branch(String),
    /// A symbolic name recovered via `git rev-parse --abbrev-ref HEAD`.
    SymbolicRef(String),
    /// Detached HEAD; the full commit id stands in for a branch name.
    Commit(String),
}

impl HeadRef {
    /// The ref string used on the current side of the diff range.
    pub fn label(&self) -> &str {
        match self {
            HeadRef::Branch(name) => name,
            HeadRef::SymbolicRef(name) => name,
            HeadRef::Commit(sha) => sha,
        }
    }

    /// The branch name to fetch, if HEAD has one.
    pub fn branch_name(&self) -> Option<&str> {
        match self {
            HeadRef::Branch(name) => Some(name),
            HeadRef::SymbolicRef(name) => Some(name),
            HeadRef::Commit(_) => None,
        }
    }
}

/// Resolve the currently checked-out ref.
///
/// Fallback chain, in order:
/// 1. `git symbolic-ref --short HEAD` - fails on detached HEAD.
/// 2. `git rev-parse --abbrev-ref HEAD` - yields the literal `HEAD` when detached.
/// 3. `git rev-parse HEAD` - the raw commit id.
///
/// # Arguments
///
/// * `repo_root` - Path to the repository root
pub fn resolve_head<P: AsRef<Path>>(repo_root: P) -> Result<HeadRef> {
    let repo_root = repo_root.as_ref();

    if let Ok(output) = run_git(repo_root, &["symbolic-ref", "--short", "HEAD"]) {
        return Ok(HeadRef::Branch(output.stdout));
    }

    let abbrev = run_git(repo_root, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    if abbrev.stdout != "HEAD" {
        return Ok(HeadRef::SymbolicRef(abbrev.stdout));
    }

    let sha = run_git(repo_root, &["rev-parse", "HEAD"]).map_err(|e| {
        ResxCheckError::GitError(format!("failed to resolve detached HEAD commit: {}", e))
    })?;
    Ok(HeadRef::Commit(sha.stdout))
}

/// Fetch the source branch and the current branch from the remote.
///
/// Ensures both sides of the upcoming diff reflect up-to-date remote history.
/// A detached `Commit` head has no name the remote can resolve, so only the
/// source branch is fetched in that case.
///
/// # Arguments
///
/// * `repo_root` - Path to the repository root
/// * `remote` - Name of the remote (e.g., "origin")
/// * `source_branch` - The branch the changes will merge into (e.g., "main")
/// * `head` - The resolved current ref
///
/// # Returns
///
/// * `Ok(())` - Both fetches succeeded
/// * `Err(ResxCheckError::GitError)` - Missing remote or fetch failure; fatal, no retry
pub fn fetch_branches<P: AsRef<Path>>(
    repo_root: P,
    remote: &str,
    source_branch: &str,
    head: &HeadRef,
) -> Result<()> {
    let repo_root = repo_root.as_ref();

    // First check if the remote exists
    let remotes = run_git(repo_root, &["remote"])?;
    if !remotes.lines().contains(&remote) {
        return Err(ResxCheckError::GitError(format!(
            "remote '{}' does not exist.\n\n\
             To fix this, either:\n\
             1. Pass a different remote with --remote <name>\n\
             2. Add the remote: git remote add {} <url>",
            remote, remote
        )));
    }

    fetch_ref(repo_root, remote, source_branch)?;

    if let Some(branch) = head.branch_name() {
        fetch_ref(repo_root, remote, branch)?;
    }

    Ok(())
}

fn fetch_ref(repo_root: &Path, remote: &str, branch: &str) -> Result<()> {
    run_git(repo_root, &["fetch", remote, branch]).map_err(|e| {
        ResxCheckError::GitError(format!(
            "failed to fetch {}/{}: {}\n\n\
             Make sure the remote '{}' is accessible and the branch '{}' exists.",
            remote, branch, e, remote, branch
        ))
    })?;

    Ok(())
}

/// List changed files of one extension between the source branch and HEAD.
///
/// Runs `git diff --name-only <remote>/<source>...<head>` (three-dot range:
/// changes reachable from the current ref but not from its common ancestor
/// with the source branch) and filters the paths to those ending in
/// `extension`, preserving diff order.
///
/// # Arguments
///
/// * `repo_root` - Path to the repository root
/// * `remote` - Name of the remote (e.g., "origin")
/// * `source_branch` - The branch to diff against
/// * `head` - The resolved current ref
/// * `extension` - File suffix to keep (e.g., ".resx")
pub fn changed_files<P: AsRef<Path>>(
    repo_root: P,
    remote: &str,
    source_branch: &str,
    head: &HeadRef,
    extension: &str,
) -> Result<Vec<String>> {
    let range = format!("{}/{}...{}", remote, source_branch, head.label());

    let output = run_git(repo_root, &["diff", "--name-only", &range]).map_err(|e| {
        ResxCheckError::GitError(format!("failed to diff {}: {}", range, e))
    })?;

    Ok(filter_by_extension(output.lines(), extension))
}

/// Keep only paths ending in `extension`, preserving input order.
fn filter_by_extension<'a, I>(paths: I, extension: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    paths
        .into_iter()
        .filter(|path| path.ends_with(extension))
        .map(str::to_string)
        .collect()
}
