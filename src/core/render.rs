//! Single-pass chain renderer.
//!
//! Walks the composed segments once, left to right, emitting each block
//! with one leading and one trailing space and a powerline arrow between
//! adjacent blocks. The arrow's foreground is the previous segment's
//! background and its background the next segment's, so the glyph visually
//! bridges the two colors; the final arrow fades into the terminal's
//! default background.
//!
//! Styling configuration is explicit via [`RenderOptions`] rather than any
//! process-global flag. In bash mode every escape sequence is wrapped in
//! the readline guard bytes `\x01`/`\x02` so PS1 width accounting stays
//! correct.
//!
//! # Public API
//! - [`RenderOptions`]: Explicit styling configuration
//! - [`render_prompt`]: Whole-prompt framing (line clear, chains, reset)
//! - [`render_chain`]: One segment chain with transition glyphs

use crate::core::compose::ComposedPrompt;
use crate::core::glyphs;
use crate::core::segment::{Color, Emphasis, Segment};
use std::io::Write;

/// Explicit styling configuration for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap escape sequences in readline guard bytes (\x01/\x02)
    pub readline_guards: bool,
}

impl RenderOptions {
    /// Options for bash PS1 embedding
    pub fn bash() -> Self {
        RenderOptions {
            readline_guards: true,
        }
    }

    /// Options for plain terminal output (no guard bytes)
    pub fn plain() -> Self {
        RenderOptions {
            readline_guards: false,
        }
    }
}

/// Render the full prompt: leading line clear, main chain, optional
/// status line, trailing reset.
pub fn render_prompt(
    prompt: &ComposedPrompt,
    out: &mut impl Write,
    options: &RenderOptions,
) -> std::io::Result<()> {
    // Fresh line, cleared, so the chain never lands mid-output.
    out.write_all(b"\n")?;
    write_control(out, b"\x1b[2K", options)?;

    render_chain(&prompt.line, out, options)?;

    if let Some(status) = &prompt.status_line {
        out.write_all(b"\n")?;
        render_chain(std::slice::from_ref(status), out, options)?;
    }

    // Reset, then clear to end of line for the command input area.
    write_control(out, b"\x1b[0m", options)?;
    out.write_all(b" ")?;
    write_control(out, b"\x1b[K", options)?;
    Ok(())
}

/// Render one chain of segments. A chain of N segments emits exactly N
/// transition glyphs: N-1 between blocks plus one closing glyph into the
/// default background. An empty chain emits nothing.
pub fn render_chain(
    segments: &[Segment],
    out: &mut impl Write,
    options: &RenderOptions,
) -> std::io::Result<()> {
    let mut previous_background: Option<Color> = None;

    for segment in segments {
        if let Some(prev) = previous_background {
            write_transition(out, prev, segment.background, options)?;
        }
        write_sgr(
            out,
            segment.emphasis,
            segment.foreground,
            segment.background,
            options,
        )?;
        out.write_all(b" ")?;
        out.write_all(segment.text.as_bytes())?;
        out.write_all(b" ")?;
        previous_background = Some(segment.background);
    }

    if let Some(last) = previous_background {
        write_transition(out, last, Color::Default, options)?;
    }
    Ok(())
}

/// Emit one arrow glyph bridging two backgrounds
fn write_transition(
    out: &mut impl Write,
    from: Color,
    to: Color,
    options: &RenderOptions,
) -> std::io::Result<()> {
    write_sgr(out, Emphasis::None, from, to, options)?;
    out.write_all(glyphs::RIGHT_ARROW.as_bytes())
}

/// Emit one SGR sequence `ESC [ <emphasis> ; <fg> ; <bg> m`
fn write_sgr(
    out: &mut impl Write,
    emphasis: Emphasis,
    foreground: Color,
    background: Color,
    options: &RenderOptions,
) -> std::io::Result<()> {
    let mut buf = itoa::Buffer::new();
    if options.readline_guards {
        out.write_all(b"\x01")?;
    }
    out.write_all(b"\x1b[")?;
    out.write_all(buf.format(emphasis.sgr_code()).as_bytes())?;
    out.write_all(b";")?;
    out.write_all(buf.format(foreground.fg_code()).as_bytes())?;
    out.write_all(b";")?;
    out.write_all(buf.format(background.bg_code()).as_bytes())?;
    out.write_all(b"m")?;
    if options.readline_guards {
        out.write_all(b"\x02")?;
    }
    Ok(())
}

/// Emit a bare control sequence, guarded when configured
fn write_control(
    out: &mut impl Write,
    sequence: &[u8],
    options: &RenderOptions,
) -> std::io::Result<()> {
    if options.readline_guards {
        out.write_all(b"\x01")?;
    }
    out.write_all(sequence)?;
    if options.readline_guards {
        out.write_all(b"\x02")?;
    }
    Ok(())
}
