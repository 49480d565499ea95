//! Promptline - a powerline-style shell prompt segment renderer.
//!
//! This library provides the core functionality for promptline: parsing
//! `git status --porcelain=v2 --branch` output into a structured repository
//! state, composing typed prompt segments from the shell's facts (exit
//! code, user, working directory, repository), and rendering them as a
//! connected chain of colored blocks with powerline transition glyphs.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Porcelain-v2 status parsing ([`RepoStatus`])
//! - Segment composition ([`compose`], [`PromptInputs`])
//! - Chain rendering ([`render_prompt`], [`RenderOptions`])
//! - Configuration and error handling

pub mod core;

// Re-export the core public API for external users
pub use core::{
    capture_status,
    compose,
    render_chain,

    render_prompt,
    Color,
    ComposedPrompt,
    Emphasis,

    // Configuration
    Layout,
    PromptConfig,
    // Error handling
    PromptError,
    // Composition
    PromptInputs,
    // Rendering
    RenderOptions,
    // Git status parsing
    RepoStatus,
    Result,
    // Segments
    Segment,
    // Identity
    UserIdentity,
};
