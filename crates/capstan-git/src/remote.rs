//! Remote URL parsing.
//!
//! Turns the raw URL of a configured remote into owner/name parts. Two
//! shapes are accepted: SSH (`git@<host>:<owner>/<name>[.git]`) and HTTP(S)
//! (`http(s)://<host>/<owner>/<name>[.git]`). Owner and name are restricted
//! to word characters, so a trailing `.git` is never captured — the pattern
//! absorbs it, no post-processing needed.

use std::sync::LazyLock;

use regex::Regex;

use crate::commands::{GitError, Result};

static SSH_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"git@\S+:(\w+)/(\w+)(\.git)?").unwrap());
static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+/(\w+)/(\w+)(\.git)?").unwrap());

/// Owner and repository name extracted from a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    /// The account or organization owning the repository.
    pub owner: String,
    /// The repository name, without any `.git` suffix.
    pub name: String,
}

/// Parse a raw remote URL into a [`RemoteInfo`].
///
/// Dispatches on a substring sniff: anything containing `"http"` goes to
/// the HTTP(S) pattern, anything containing `"git@"` to the SSH pattern.
/// A URL matching neither shape (or an unrecognized scheme) is a
/// [`GitError::UnparsedRemote`].
pub fn parse_remote(url: &str) -> Result<RemoteInfo> {
    let pattern = if url.contains("http") {
        &HTTP_URL
    } else if url.contains("git@") {
        &SSH_URL
    } else {
        return Err(GitError::UnparsedRemote(url.to_string()));
    };

    let caps = pattern
        .captures(url)
        .ok_or_else(|| GitError::UnparsedRemote(url.to_string()))?;

    Ok(RemoteInfo {
        owner: caps[1].to_string(),
        name: caps[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_remote_accepts_both_shapes_with_and_without_suffix() {
        for url in [
            "git@github.com:owner/name.git",
            "git@github.com:owner/name",
            "git@bitbucket.org:owner/name",
            "git@github-perso:owner/name.git",
            "https://github.com/owner/name",
            "http://github.com/owner/name",
            "https://github.com/owner/name.git",
        ] {
            let info = parse_remote(url).unwrap_or_else(|e| panic!("{url}: {e}"));
            assert_eq!(
                info,
                RemoteInfo {
                    owner: "owner".to_string(),
                    name: "name".to_string(),
                },
                "parsing {url}"
            );
        }
    }

    #[test]
    fn parse_remote_rejects_unknown_shapes() {
        for url in ["ftp://github.com/owner/name", "owner/name", ""] {
            match parse_remote(url) {
                Err(GitError::UnparsedRemote(u)) => assert_eq!(u, url),
                other => panic!("expected UnparsedRemote for {url:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_remote_rejects_http_without_enough_segments() {
        assert!(matches!(
            parse_remote("https://github.com/"),
            Err(GitError::UnparsedRemote(_))
        ));
    }
}
