//! Subprocess invocation primitive.
//!
//! Runs an external program, captures its stdout, and turns non-zero exits
//! into a typed error that still carries the numeric status. Higher layers
//! (the git command layer) need that status because git encodes well-defined
//! negative results — "no diff", "ref not found" — as specific exit codes
//! rather than output.
//!
//! The working directory is scoped per invocation via
//! [`Command::current_dir`], so callers never have to mutate the
//! process-global current directory.

use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// Errors from running an external command.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The program could not be spawned (not found, bad working directory).
    #[error("failed to execute {program}: {source}")]
    Spawn {
        /// The program that was invoked.
        program: String,
        /// The underlying io error.
        source: io::Error,
    },

    /// The program ran but exited with a non-zero status.
    #[error("{program} exited with {}: {stderr}", code.map_or(String::from("signal"), |c| format!("code {c}")))]
    Failed {
        /// The program that was invoked.
        program: String,
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// Trimmed stderr content.
        stderr: String,
    },
}

impl ExecError {
    /// Recover the numeric exit status from a failed invocation.
    ///
    /// Returns `None` when the failure carries no code: the program never
    /// ran, or it was killed by a signal. Callers that give meaning to
    /// specific codes (diff present, verify failed) must treat `None` as a
    /// genuine error, not as any particular status.
    pub fn exit_status(&self) -> Option<i32> {
        match self {
            ExecError::Spawn { .. } => None,
            ExecError::Failed { code, .. } => *code,
        }
    }
}

/// A specialized `Result` type for command invocation.
pub type Result<T> = std::result::Result<T, ExecError>;

/// Run `program` with `args` in the directory `cwd` and return its stdout.
///
/// Stdout is decoded lossily and trimmed. A non-zero exit becomes
/// [`ExecError::Failed`] with the code and trimmed stderr attached.
pub fn run(program: &str, args: &[&str], cwd: &Path) -> Result<String> {
    debug!(program, ?args, cwd = %cwd.display(), "running command");

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|source| ExecError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(program, code = ?output.status.code(), "command failed");
        return Err(ExecError::Failed {
            program: program.to_string(),
            code: output.status.code(),
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_captures_stdout() {
        let out = run("git", &["--version"], Path::new(".")).unwrap();
        assert!(out.starts_with("git version"), "unexpected output: {out}");
    }

    #[test]
    fn run_failure_carries_exit_status() {
        let err = run("git", &["not-a-real-subcommand"], Path::new(".")).unwrap_err();
        match &err {
            ExecError::Failed { code, stderr, .. } => {
                assert!(code.is_some());
                assert!(!stderr.is_empty());
            }
            other => panic!("expected Failed, got: {other:?}"),
        }
        assert_eq!(err.exit_status(), Some(1));
    }

    #[test]
    fn run_missing_program_is_spawn_error() {
        let err = run("definitely-not-a-program-xyz", &[], Path::new(".")).unwrap_err();
        assert!(matches!(err, ExecError::Spawn { .. }));
        assert_eq!(err.exit_status(), None);
    }

    #[test]
    fn run_bad_cwd_is_spawn_error() {
        let err = run("git", &["status"], Path::new("/nonexistent/directory/xyz")).unwrap_err();
        assert!(matches!(err, ExecError::Spawn { .. }));
    }
}
