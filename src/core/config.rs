//! Prompt behavior configuration.
//!
//! Two historical deployments of this prompt disagreed on user-segment
//! visibility and layout; both behaviors live here behind one
//! [`PromptConfig`] instead of duplicated code paths. Values come from an
//! optional JSON file under the config directory, then environment
//! variables override individual fields.
//!
//! Loading never fails: a missing or malformed file falls back to defaults
//! with a debug log, because configuration trouble must not break the
//! shell prompt.
//!
//! # Environment overrides
//! - `PROMPTLINE_DEFAULT_USER` — suppress the user segment when the current
//!   username matches this value
//! - `PROMPTLINE_TWO_LINE` — non-empty switches to the two-line layout

use crate::core::dirs::get_config_directory;
use crate::core::error::{PromptError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming the user whose segment is suppressed
pub const DEFAULT_USER_VAR: &str = "PROMPTLINE_DEFAULT_USER";

/// Environment variable selecting the two-line layout when non-empty
pub const TWO_LINE_VAR: &str = "PROMPTLINE_TWO_LINE";

/// Where the exit-status segment is placed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Exit status leads the main chain
    #[default]
    SingleLine,
    /// Exit status renders alone on a second line below the chain
    TwoLine,
}

/// Consolidated prompt behavior switches.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PromptConfig {
    /// Show the user segment even when the username matches `default_user`
    pub show_user_always: bool,
    /// Username whose segment is suppressed (unless `show_user_always`)
    pub default_user: Option<String>,
    /// Append `@hostname` to the user segment
    pub append_hostname: bool,
    /// One-line or two-line rendering
    pub layout: Layout,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            show_user_always: false,
            default_user: None,
            append_hostname: false,
            layout: Layout::SingleLine,
        }
    }
}

impl PromptConfig {
    /// Load configuration: file first, then environment overrides.
    /// Degrades to defaults on any problem.
    pub fn load() -> Self {
        let mut config = match Self::try_load_file() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                log::debug!("ignoring config file: {e}");
                Self::default()
            }
        };
        config.apply_overrides(
            std::env::var(DEFAULT_USER_VAR).ok(),
            std::env::var(TWO_LINE_VAR).is_ok_and(|v| !v.is_empty()),
        );
        config
    }

    /// Read the JSON config file if one exists
    fn try_load_file() -> Result<Option<Self>> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|e| PromptError::config_read_failed(&path, e))?;
        let config = serde_json::from_str(&content)
            .map_err(|e| PromptError::config_parse_failed(&path, e))?;
        Ok(Some(config))
    }

    fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join("config.json"))
    }

    /// Apply environment-derived overrides on top of file values
    pub fn apply_overrides(&mut self, default_user: Option<String>, two_line: bool) {
        if let Some(user) = default_user {
            self.default_user = Some(user);
        }
        if two_line {
            self.layout = Layout::TwoLine;
        }
    }
}
