//! Core functionality for the promptline renderer.
//!
//! This module provides the porcelain-v2 status parser, the segment
//! composition rules, the chain renderer, and the supporting glue for
//! configuration, identity and error handling.

pub mod compose;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod glyphs;
pub mod render;
pub mod repo_status;
pub mod segment;
pub mod user;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{PromptError, Result};

// === Git status ===
// Subprocess capture and the porcelain-v2 parser
pub use git::capture_status;
pub use repo_status::RepoStatus;

// === Segments ===
// Palette, emphasis and the prompt building block
pub use segment::{Color, Emphasis, Segment};

// === Composition ===
// Mapping gathered facts to the ordered segment chain
pub use compose::{compose, ComposedPrompt, PromptInputs};

// === Rendering ===
// Single-pass chain renderer with explicit styling options
pub use render::{render_chain, render_prompt, RenderOptions};

// === Configuration ===
// File + environment configuration of the divergent prompt behaviors
pub use config::{Layout, PromptConfig};

// === Identity ===
// Best-effort current user lookup
pub use user::UserIdentity;
