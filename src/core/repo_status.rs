//! Porcelain-v2 git status parsing.
//!
//! This module turns the raw output of
//! `git status --porcelain=v2 --ignore-submodules --branch` into a
//! structured [`RepoStatus`]. Parsing is a pure function over the captured
//! text; the subprocess plumbing lives in [`crate::core::git`].
//!
//! # Public API
//! - [`RepoStatus`]: Parsed branch/worktree state
//!
//! # Format notes
//! Porcelain v2 emits `#`-prefixed header lines (`# <key> <value>`) followed
//! by one data line per changed path. Only three headers matter here:
//! `branch.head`, `branch.oid` and `branch.ab`. The presence of any data
//! line at all is what makes the repository dirty; its content is
//! irrelevant for a prompt.

use std::collections::HashMap;

/// Short length of a commit hash shown for a detached HEAD
const SHORT_OID_LEN: usize = 8;

/// Parsed git branch and worktree state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoStatus {
    /// Branch name, or the short commit hash when detached
    pub head: String,
    /// True when HEAD points at a commit rather than a named branch
    pub detached: bool,
    /// True iff any non-header status line was observed
    pub dirty: bool,
    /// Commits ahead of upstream (0 when no upstream is configured)
    pub ahead: u32,
    /// Commits behind upstream (0 when no upstream is configured)
    pub behind: u32,
    /// Whether a `branch.ab` header was present at all. An absent header
    /// suppresses the divergence clause entirely, as opposed to `+0 -0`
    /// which suppresses only the zero halves.
    pub has_upstream: bool,
}

impl RepoStatus {
    /// Parse porcelain-v2 branch status output.
    ///
    /// Returns `None` when the text carries no `branch.head` header, which
    /// is the "not a git worktree" signal; no git segment is emitted
    /// downstream in that case.
    pub fn parse(raw: &str) -> Option<RepoStatus> {
        let mut headers: HashMap<&str, &str> = HashMap::new();
        let mut dirty = false;

        for line in raw.lines() {
            if line.starts_with('#') {
                // `# <key> <value>`: at most three fields; wrong field
                // count is skipped, last occurrence of a key wins.
                let mut fields = line.splitn(3, ' ');
                if let (Some(_), Some(key), Some(value)) =
                    (fields.next(), fields.next(), fields.next())
                {
                    headers.insert(key, value);
                }
            } else if !line.is_empty() {
                // First data line proves dirtiness; nothing further to learn.
                dirty = true;
                break;
            }
        }

        let raw_head = headers.get("branch.head")?;

        let (head, detached) = if *raw_head == "(detached)" {
            let head = headers
                .get("branch.oid")
                .map(|oid| short_oid(oid))
                .unwrap_or(raw_head)
                .to_string();
            (head, true)
        } else {
            (raw_head.to_string(), false)
        };

        let (ahead, behind, has_upstream) = match headers.get("branch.ab") {
            Some(ab) => {
                let (ahead, behind) = parse_ahead_behind(ab);
                (ahead, behind, true)
            }
            None => (0, 0, false),
        };

        Some(RepoStatus {
            head,
            detached,
            dirty,
            ahead,
            behind,
            has_upstream,
        })
    }
}

/// First eight characters of a commit hash, tolerating short input
fn short_oid(oid: &str) -> &str {
    oid.get(..SHORT_OID_LEN).unwrap_or(oid)
}

/// Parse a `branch.ab` value of the form `+<ahead> -<behind>`.
///
/// Unparseable tokens degrade to 0 rather than failing; a prompt renderer
/// has nowhere to report a malformed header.
fn parse_ahead_behind(ab: &str) -> (u32, u32) {
    let mut ahead = 0;
    let mut behind = 0;
    for token in ab.split_whitespace() {
        if let Some(n) = token.strip_prefix('+') {
            ahead = n.parse().unwrap_or(0);
        } else if let Some(n) = token.strip_prefix('-') {
            behind = n.parse().unwrap_or(0);
        }
    }
    (ahead, behind)
}
