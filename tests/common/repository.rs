//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with
//! various states and configurations for prompt rendering scenarios.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the worktree path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the worktree path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Run a git command in `dir`, failing the test on a non-zero exit
pub fn git(dir: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    if !output.status.success() {
        anyhow::bail!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository, and
/// sets up basic git configuration to avoid user prompts.
pub fn setup_test_repo() -> anyhow::Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    // Canonicalize so HOME comparisons survive /var -> /private/var links.
    let repo_path = temp_dir.path().canonicalize()?;

    git(&repo_path, &["init"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit on branch `main`
pub fn setup_test_repo_with_initial_commit() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo()?;
    create_file(&repo.path, "initial.txt", "initial content")?;
    git(&repo.path, &["add", "."])?;
    git(&repo.path, &["commit", "-m", "Initial commit"])?;
    git(&repo.path, &["branch", "-M", "main"])?;
    Ok(repo)
}

/// Create (or overwrite) a file relative to the repository root
pub fn create_file(repo_path: &Path, name: &str, content: &str) -> anyhow::Result<()> {
    fs::write(repo_path.join(name), content)?;
    Ok(())
}

/// Commit all pending changes
pub fn commit_all(repo_path: &Path, message: &str) -> anyhow::Result<()> {
    git(repo_path, &["add", "."])?;
    git(repo_path, &["commit", "-m", message])?;
    Ok(())
}
