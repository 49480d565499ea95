//! Segment composition: mapping gathered facts to the ordered prompt chain.
//!
//! The composer is pure: all inputs (exit code, user identity, cwd, parsed
//! repository status) are gathered up front by [`PromptInputs::gather`],
//! and [`compose`] maps them to segments without performing any I/O.
//!
//! # Public API
//! - [`PromptInputs`]: Pre-gathered facts for one prompt render
//! - [`ComposedPrompt`]: Main chain plus optional second-line segment
//! - [`compose`]: The composition rules
//!
//! # Segment order
//! exit status (if supplied), user (if not suppressed), working directory
//! (always), git (if in a repository). In the two-line layout the exit
//! status moves to its own line below the chain.

use crate::core::config::{Layout, PromptConfig};
use crate::core::git;
use crate::core::glyphs;
use crate::core::repo_status::RepoStatus;
use crate::core::segment::{Color, Segment};
use crate::core::user::UserIdentity;
use std::path::{Path, PathBuf};

/// Sentinel shown when the working directory cannot be determined
const CWD_ERROR: &str = "!!ERR";

/// Everything the composer needs, gathered once per run.
#[derive(Debug, Clone)]
pub struct PromptInputs {
    /// Previous command's exit status; absent on the first prompt
    pub exit_code: Option<String>,
    pub user: UserIdentity,
    pub cwd: Option<PathBuf>,
    pub home: Option<String>,
    pub repo: Option<RepoStatus>,
}

impl PromptInputs {
    /// Gather all inputs from the environment and the git subprocess.
    /// Every lookup degrades rather than fails.
    pub fn gather(exit_code: Option<String>) -> Self {
        let cwd = std::env::current_dir().ok();
        let home = std::env::var("HOME").ok();
        let user = UserIdentity::current();

        let repo = cwd.as_deref().and_then(|dir| match git::capture_status(dir) {
            Ok(raw) => RepoStatus::parse(&raw),
            Err(e) => {
                log::debug!("omitting git segment: {e}");
                None
            }
        });

        PromptInputs {
            exit_code,
            user,
            cwd,
            home,
            repo,
        }
    }
}

/// The composed prompt: one main chain, plus the exit-status segment on
/// its own line in the two-line layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub line: Vec<Segment>,
    pub status_line: Option<Segment>,
}

/// Map gathered inputs to the ordered segment chain.
pub fn compose(inputs: &PromptInputs, config: &PromptConfig) -> ComposedPrompt {
    let mut line = Vec::new();
    let mut status_line = None;

    if let Some(code) = inputs.exit_code.as_deref() {
        let seg = exit_segment(code);
        match config.layout {
            Layout::SingleLine => line.push(seg),
            Layout::TwoLine => {
                // A successful root prompt gets a warning background on the
                // status line so privileged shells stay visually distinct.
                let seg = if seg.background == Color::HiGreen && inputs.user.is_root() {
                    seg.with_background(Color::HiYellow)
                } else {
                    seg
                };
                status_line = Some(seg);
            }
        }
    }

    if let Some(seg) = user_segment(&inputs.user, config) {
        line.push(seg);
    }

    line.push(cwd_segment(inputs.cwd.as_deref(), inputs.home.as_deref()));

    if let Some(repo) = &inputs.repo {
        line.push(git_segment(repo));
    }

    ComposedPrompt { line, status_line }
}

/// Exit-status segment: a checkmark on green for success, a cross plus the
/// literal code on red otherwise.
fn exit_segment(code: &str) -> Segment {
    if code == "0" {
        Segment::new(Color::HiBlack, Color::HiGreen, glyphs::SUCCESS)
    } else {
        Segment::new(
            Color::HiBlack,
            Color::HiRed,
            format!("{} {code}", glyphs::FAILURE),
        )
    }
}

/// User segment, or `None` when suppressed or there is nothing to show.
fn user_segment(user: &UserIdentity, config: &PromptConfig) -> Option<Segment> {
    let suppressed = !config.show_user_always
        && config
            .default_user
            .as_deref()
            .is_some_and(|default| default == user.name);
    if suppressed {
        return None;
    }

    let mut text = user.name.clone();
    if config.append_hostname && !text.is_empty() {
        if let Some(host) = &user.hostname {
            text.push('@');
            text.push_str(host);
        }
    }
    if user.is_root() {
        text = if text.is_empty() {
            glyphs::ROOT.to_string()
        } else {
            format!("{} {text}", glyphs::ROOT)
        };
    }
    if text.is_empty() {
        return None;
    }

    Some(Segment::new(Color::HiYellow, Color::Black, text))
}

/// Working-directory segment; always present, falling back to a sentinel
/// when the cwd could not be determined.
fn cwd_segment(cwd: Option<&Path>, home: Option<&str>) -> Segment {
    let text = match cwd {
        Some(path) => abbreviate_home(&path.to_string_lossy(), home),
        None => CWD_ERROR.to_string(),
    };
    Segment::new(Color::HiBlack, Color::HiBlue, text)
}

/// Replace a leading home-directory prefix with `~`
fn abbreviate_home(path: &str, home: Option<&str>) -> String {
    match home {
        Some(home) if !home.is_empty() => match path.strip_prefix(home) {
            Some(rest) => format!("~{rest}"),
            None => path.to_string(),
        },
        _ => path.to_string(),
    }
}

/// Git segment: head reference, dirty marker, divergence clause.
fn git_segment(repo: &RepoStatus) -> Segment {
    let glyph = if repo.detached {
        glyphs::DETACHED
    } else {
        glyphs::BRANCH
    };
    let mut text = format!("{glyph} {}", repo.head);

    let background = if repo.dirty {
        text.push_str(glyphs::DIRTY);
        Color::HiYellow
    } else {
        Color::HiGreen
    };

    // The divergence clause is skipped outright without an upstream, which
    // renders identically to +0 -0 but keeps the header's absence distinct.
    if repo.has_upstream {
        let mut divergence = String::new();
        if repo.ahead > 0 {
            divergence.push_str(&format!("{}{}", glyphs::AHEAD, repo.ahead));
        }
        if repo.behind > 0 {
            if !divergence.is_empty() {
                divergence.push(' ');
            }
            divergence.push_str(&format!("{}{}", glyphs::BEHIND, repo.behind));
        }
        if !divergence.is_empty() {
            text.push(' ');
            text.push_str(&divergence);
        }
    }

    Segment::new(Color::HiBlack, background, text)
}
