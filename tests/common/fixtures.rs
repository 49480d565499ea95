//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories in the specific states the
//! git prompt segment distinguishes: clean, dirty, detached, and diverged
//! from an upstream.

#![allow(dead_code)]

use super::repository::*;

/// Scenario: clean repository on branch `main`, no upstream
pub fn create_clean_repo() -> anyhow::Result<TestRepo> {
    setup_test_repo_with_initial_commit()
}

/// Scenario: repository with uncommitted modifications
pub fn create_dirty_repo() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    create_file(&repo.path, "initial.txt", "modified content")?;
    Ok(repo)
}

/// Scenario: detached HEAD. Returns the repository and the full commit hash
/// HEAD points at.
pub fn create_detached_repo() -> anyhow::Result<(TestRepo, String)> {
    let repo = setup_test_repo_with_initial_commit()?;
    git(&repo.path, &["checkout", "--detach", "HEAD"])?;
    let oid = git(&repo.path, &["rev-parse", "HEAD"])?;
    Ok((repo, oid))
}

/// Scenario: repository with a local bare upstream, `ahead` unpushed local
/// commits and `behind` remote commits the local branch is missing.
///
/// The behind half is produced by pushing extra commits and then resetting
/// the local branch back, so no network is involved.
pub fn create_diverged_repo(ahead: usize, behind: usize) -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    // The bare remote lives under .git so it never shows up as an
    // untracked directory in the worktree.
    let remote_path = repo.path.join(".git").join("upstream.git");
    std::fs::create_dir_all(&remote_path)?;
    git(&remote_path, &["init", "--bare"])?;

    git(
        &repo.path,
        &["remote", "add", "origin", remote_path.to_str().unwrap()],
    )?;

    for i in 0..behind {
        create_file(&repo.path, &format!("behind{i}.txt"), "content")?;
        commit_all(&repo.path, &format!("Behind commit {i}"))?;
    }
    git(&repo.path, &["push", "-u", "origin", "main"])?;
    if behind > 0 {
        git(&repo.path, &["reset", "--hard", &format!("HEAD~{behind}")])?;
    }

    for i in 0..ahead {
        create_file(&repo.path, &format!("ahead{i}.txt"), "content")?;
        commit_all(&repo.path, &format!("Ahead commit {i}"))?;
    }

    Ok(repo)
}
