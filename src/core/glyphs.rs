//! Unicode glyphs used in prompt segments.
//!
//! The powerline glyphs (arrow, branch) live in the private-use area and
//! require a patched font; the rest are plain Unicode symbols.

/// Powerline right-pointing solid arrow, bridges two segment backgrounds.
pub const RIGHT_ARROW: &str = "\u{e0b0}";

/// Powerline branch symbol, leads the git segment on a named branch.
pub const BRANCH: &str = "\u{e0a0}";

/// Detached HEAD marker.
pub const DETACHED: &str = "\u{27a6}";

/// Appended to the git segment when the worktree has changes.
pub const DIRTY: &str = "\u{00b1}";

/// Exit-status segment for a zero exit code.
pub const SUCCESS: &str = "\u{2714}";

/// Exit-status segment for a non-zero exit code.
pub const FAILURE: &str = "\u{2718}";

/// Prefixes the user segment when running as root.
pub const ROOT: &str = "\u{26a1}";

/// Commits ahead of upstream.
pub const AHEAD: &str = "\u{2191}";

/// Commits behind upstream.
pub const BEHIND: &str = "\u{2193}";
