//! Git command layer.
//!
//! One stateless function per logical git operation. Each takes the working
//! directory explicitly and maps to exactly one external invocation (plus
//! the parsing of its output); none of them hold state or locks. For a
//! handle that supplies the directory for you, see
//! [`Repository`](crate::repo::Repository).

use std::path::Path;

use capstan_exec::ExecError;
use thiserror::Error;
use tracing::debug;

use crate::remote::{self, RemoteInfo};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when running git commands.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be run, or exited with an unexpected status.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// A remote URL matched neither the SSH nor the HTTP(S) shape.
    #[error("unable to parse remote {0}")]
    UnparsedRemote(String),
}

/// A specialized `Result` type for git operations.
pub type Result<T> = std::result::Result<T, GitError>;

/// Run `git` with the given arguments in `cwd`, returning trimmed stdout.
fn git(cwd: &Path, args: &[&str]) -> Result<String> {
    Ok(capstan_exec::run("git", args, cwd)?)
}

// ---------------------------------------------------------------------------
// Remotes
// ---------------------------------------------------------------------------

/// Add a new remote to the repository.
///
/// Fails if a remote named `name` already exists.
pub fn add_remote(cwd: &Path, name: &str, url: &str) -> Result<()> {
    git(cwd, &["remote", "add", name, url])?;
    Ok(())
}

/// Return the URL of the requested remote.
///
/// Fails if the remote is not configured.
pub fn remote(cwd: &Path, name: &str) -> Result<String> {
    let key = format!("remote.{name}.url");
    git(cwd, &["config", "--get", &key])
}

/// Return structured owner/name data about the `origin` remote.
pub fn remote_origin(cwd: &Path) -> Result<RemoteInfo> {
    let url = remote(cwd, "origin")?;
    remote::parse_remote(&url)
}

// ---------------------------------------------------------------------------
// Refs and state
// ---------------------------------------------------------------------------

/// Return the current branch name.
///
/// Fails on a detached HEAD (git reports `HEAD` is not a symbolic ref) or
/// outside a repository.
pub fn branch(cwd: &Path) -> Result<String> {
    git(cwd, &["rev-parse", "--abbrev-ref", "HEAD"])
}

/// Resolve a ref expression to an object id.
///
/// Lenient by contract: an unresolvable ref AND a failed invocation both
/// come back as `Ok("")` — the two are indistinguishable to the caller.
/// Use [`ref_exists`] when "missing" and "broken" must be told apart.
pub fn rev_parse(cwd: &Path, arg: &str) -> Result<String> {
    match git(cwd, &["rev-parse", "-q", arg]) {
        Ok(id) => Ok(id),
        Err(_) => Ok(String::new()),
    }
}

/// Check whether a ref exists in the repository.
///
/// `git rev-parse --quiet --verify` exits 1 when verification fails, which
/// maps to `Ok(false)`; any other non-zero status is a genuine error.
pub fn ref_exists(cwd: &Path, ref_: &str) -> Result<bool> {
    match git(cwd, &["rev-parse", "--quiet", "--verify", ref_]) {
        Ok(_) => Ok(true),
        Err(GitError::Exec(err)) if err.exit_status() == Some(1) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Check whether the working tree differs from HEAD.
///
/// `git diff --quiet` exits 1 when differences are present, which maps to
/// `Ok(true)`; any other non-zero status is a genuine error.
pub fn has_local_diff(cwd: &Path) -> Result<bool> {
    match git(cwd, &["diff", "--quiet", "HEAD"]) {
        Ok(_) => Ok(false),
        Err(GitError::Exec(err)) if err.exit_status() == Some(1) => Ok(true),
        Err(err) => Err(err),
    }
}

// ---------------------------------------------------------------------------
// Branch movement
// ---------------------------------------------------------------------------

/// Switch to `ref_`.
///
/// With a `start` point, any stale local branch named `ref_` is deleted
/// first (a failed delete is ignored: the branch may simply not exist) and
/// the branch is recreated from `start` with `checkout -b`. Without one,
/// this is a plain `git checkout`.
pub fn checkout(cwd: &Path, ref_: &str, start: Option<&str>) -> Result<()> {
    match start {
        None => {
            git(cwd, &["checkout", ref_])?;
        }
        Some(start) => {
            if let Err(err) = git(cwd, &["branch", "-D", ref_]) {
                debug!(ref_, %err, "no stale branch to delete");
            }
            git(cwd, &["checkout", "-b", ref_, start])?;
        }
    }
    Ok(())
}

/// Execute `git pull` against the given remote.
pub fn pull(cwd: &Path, remote: &str) -> Result<()> {
    git(cwd, &["pull", remote])?;
    Ok(())
}

/// Execute `git fetch`, against a specific remote when one is given.
pub fn fetch(cwd: &Path, remote: Option<&str>) -> Result<()> {
    match remote {
        Some(remote) => git(cwd, &["fetch", remote])?,
        None => git(cwd, &["fetch"])?,
    };
    Ok(())
}

/// Execute `git merge` with the given ref.
pub fn merge(cwd: &Path, ref_: &str) -> Result<()> {
    git(cwd, &["merge", ref_])?;
    Ok(())
}

/// Execute `git reset --hard` to the given ref.
pub fn reset_hard(cwd: &Path, ref_: &str) -> Result<()> {
    git(cwd, &["reset", "--hard", ref_])?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Log
// ---------------------------------------------------------------------------

/// A single commit from the log: abbreviated id plus message first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Abbreviated revision id.
    pub ref_: String,
    /// First line of the commit message.
    pub message: String,
}

/// Return the commits in the range `start..end` (exclusive start, inclusive
/// end), newest first, as emitted by `git log --oneline`.
///
/// Malformed output lines are skipped rather than failing the whole call.
pub fn log(cwd: &Path, start: &str, end: &str) -> Result<Vec<Commit>> {
    let range = format!("{start}..{end}");
    let output = git(cwd, &["log", &range, "--oneline"])?;
    Ok(parse_log(&output))
}

/// Split each `--oneline` line on the first space into (id, message).
///
/// Lines that do not yield exactly two non-empty parts are dropped, which
/// tolerates blank trailing lines in the captured output.
fn parse_log(output: &str) -> Vec<Commit> {
    output
        .lines()
        .filter_map(|line| {
            let (ref_, message) = line.split_once(' ')?;
            if ref_.is_empty() || message.is_empty() {
                return None;
            }
            Some(Commit {
                ref_: ref_.to_string(),
                message: message.to_string(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
