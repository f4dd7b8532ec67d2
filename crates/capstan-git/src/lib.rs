//! Typed adapter over the `git` command line.
//!
//! This crate shells out to the external `git` binary and parses its textual
//! output into structured values. It performs no repository-format parsing
//! of its own; all git semantics live in the external tool.
//!
//! Two layers:
//!
//! - [`commands`]: one stateless function per logical git operation, each
//!   taking an explicit working directory.
//! - [`repo`]: the [`Repository`] handle, binding a path to every command
//!   so callers on concurrent threads can drive independent checkouts.
//!
//! The working directory is passed per invocation (never set process-wide),
//! so distinct handles are safe to use in parallel without any locking.
//!
//! # Example
//!
//! ```no_run
//! use capstan_git::Repository;
//!
//! # fn main() -> capstan_git::Result<()> {
//! let repo = Repository::new("/path/to/checkout");
//! repo.fetch(Some("origin"))?;
//! for commit in repo.log("origin/main", "HEAD")? {
//!     println!("{} {}", commit.ref_, commit.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod remote;
pub mod repo;

pub use commands::{Commit, GitError, Result};
pub use remote::RemoteInfo;
pub use repo::Repository;
