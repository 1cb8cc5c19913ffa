//! # Git Module
//!
//! Branch lookup for the status line using the gix library. Discovery walks
//! up from the starting directory until a repository is found.

use log::debug;
use std::path::Path;

/// Characters of the commit id shown for a detached HEAD
const SHORT_COMMIT_LEN: usize = 7;

/// Short branch name of the repository containing `start_dir`.
///
/// A detached HEAD is shown as an abbreviated commit id followed by `...`.
/// Returns `None` outside of a repository.
pub fn read_git_branch(start_dir: &Path) -> Option<String> {
    let repo = match gix::discover(start_dir) {
        Ok(repo) => repo,
        Err(err) => {
            debug!("no git repository at {}: {err}", start_dir.display());
            return None;
        }
    };
    let head = repo.head().ok()?;
    if let Some(name) = head.referent_name() {
        return Some(name.shorten().to_string());
    }
    let hex = head.id()?.to_hex().to_string();
    let short: String = hex.chars().take(SHORT_COMMIT_LEN).collect();
    Some(format!("{short}..."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn repo_with_head(head: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        gix::init(dir.path()).unwrap();
        fs::write(dir.path().join(".git").join("HEAD"), head).unwrap();
        dir
    }

    #[test]
    fn test_branch_ref_in_head() {
        let dir = repo_with_head("ref: refs/heads/main\n");
        assert_eq!(read_git_branch(dir.path()).as_deref(), Some("main"));
    }

    #[test]
    fn test_finds_repository_in_parent() {
        let dir = repo_with_head("ref: refs/heads/develop\n");
        let sub = dir.path().join("subdir").join("deep");
        fs::create_dir_all(&sub).unwrap();
        assert_eq!(read_git_branch(&sub).as_deref(), Some("develop"));
    }

    #[test]
    fn test_detached_head_is_abbreviated() {
        let dir = repo_with_head("abc1234567890abcdef1234567890abcdef12345\n");
        assert_eq!(read_git_branch(dir.path()).as_deref(), Some("abc1234..."));
    }

    #[test]
    fn test_not_a_repository() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_git_branch(dir.path()), None);
    }
}
