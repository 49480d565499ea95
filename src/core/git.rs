//! Git subprocess invocation.
//!
//! One blocking call per prompt: run `git status` in porcelain-v2 branch
//! mode and hand the fully buffered stdout to the parser. Any failure here
//! (git missing, not a repository, fatal error) is an ordinary outcome for
//! a prompt renderer, so callers downgrade the error to "no git segment".
//!
//! No timeout is applied; a git hang would hang the prompt. See DESIGN.md.

use crate::core::error::{PromptError, Result};
use std::path::Path;
use std::process::Command;

/// Arguments of the one git invocation this program ever makes
const STATUS_ARGS: [&str; 4] = [
    "status",
    "--porcelain=v2",
    "--ignore-submodules",
    "--branch",
];

/// Capture porcelain-v2 branch status output for `dir`.
///
/// Returns the full stdout on success. Launch failure and non-zero exit
/// both map to errors the caller treats as "not a repository".
pub fn capture_status(dir: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(STATUS_ARGS)
        .current_dir(dir)
        .output()
        .map_err(PromptError::git_launch_failed)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PromptError::git_status_failed(stderr.trim()));
    }

    String::from_utf8(output.stdout).map_err(|_| PromptError::GitOutputNotUtf8)
}
