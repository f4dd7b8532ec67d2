//! Repository handle.
//!
//! [`Repository`] binds a filesystem path to every command-layer operation,
//! so callers never have to thread the working directory through each call.
//! The handle caches nothing: every method re-derives state by invoking
//! git, and the directory is scoped to each spawned process rather than set
//! process-wide. That makes handles to different checkouts safe to drive
//! from concurrent threads with no locking at all.

use std::path::{Path, PathBuf};

use crate::commands::{self, Commit, Result};
use crate::remote::RemoteInfo;

/// A handle on a git checkout at a fixed path.
///
/// Immutable after construction; cheap to clone and share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Bind a handle to `path` as-is.
    ///
    /// The path is not validated; the first operation fails if it is not a
    /// git checkout.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Repository { path: path.into() }
    }

    /// Walk up from `start` looking for a `.git` directory (or `.git` file,
    /// as used by worktrees) and bind a handle to the repository root.
    ///
    /// Returns `None` if the filesystem root is reached without finding one.
    pub fn discover(start: &Path) -> Option<Self> {
        let start = start.canonicalize().ok()?;
        let mut current = start.as_path();
        loop {
            if current.join(".git").exists() {
                return Some(Repository::new(current));
            }
            match current.parent() {
                Some(parent) if parent != current => current = parent,
                _ => return None,
            }
        }
    }

    /// The path this handle is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a new remote to the repository.
    pub fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        commands::add_remote(&self.path, name, url)
    }

    /// Return the URL of the requested remote.
    pub fn remote(&self, name: &str) -> Result<String> {
        commands::remote(&self.path, name)
    }

    /// Return structured owner/name data about the `origin` remote.
    pub fn remote_origin(&self) -> Result<RemoteInfo> {
        commands::remote_origin(&self.path)
    }

    /// Return the current branch name.
    pub fn branch(&self) -> Result<String> {
        commands::branch(&self.path)
    }

    /// Resolve a ref expression, leniently (see [`commands::rev_parse`]).
    pub fn rev_parse(&self, arg: &str) -> Result<String> {
        commands::rev_parse(&self.path, arg)
    }

    /// Check whether a ref exists in the repository.
    pub fn ref_exists(&self, ref_: &str) -> Result<bool> {
        commands::ref_exists(&self.path, ref_)
    }

    /// Check whether the working tree differs from HEAD.
    pub fn has_local_diff(&self) -> Result<bool> {
        commands::has_local_diff(&self.path)
    }

    /// Switch to `ref_`, recreating it from `start` when one is given.
    pub fn checkout(&self, ref_: &str, start: Option<&str>) -> Result<()> {
        commands::checkout(&self.path, ref_, start)
    }

    /// Execute `git pull` against the given remote.
    pub fn pull(&self, remote: &str) -> Result<()> {
        commands::pull(&self.path, remote)
    }

    /// Execute `git fetch`, against a specific remote when one is given.
    pub fn fetch(&self, remote: Option<&str>) -> Result<()> {
        commands::fetch(&self.path, remote)
    }

    /// Execute `git merge` with the given ref.
    pub fn merge(&self, ref_: &str) -> Result<()> {
        commands::merge(&self.path, ref_)
    }

    /// Execute `git reset --hard` to the given ref.
    pub fn reset_hard(&self, ref_: &str) -> Result<()> {
        commands::reset_hard(&self.path, ref_)
    }

    /// Return the commits in the range `start..end`, newest first.
    pub fn log(&self, start: &str, end: &str) -> Result<Vec<Commit>> {
        commands::log(&self.path, start, end)
    }
}
