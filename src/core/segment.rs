//! Segment and palette types for the prompt chain.
//!
//! This module defines the enumerated color palette and the [`Segment`]
//! building block consumed by the renderer. Colors are abstract identifiers
//! with explicit SGR code tables; nothing outside this module deals in raw
//! ANSI numbers, and in particular the transition foreground paired with a
//! background is obtained from the palette, never by arithmetic on codes.
//!
//! # Public API
//! - [`Color`]: Enumerated palette with foreground/background SGR tables
//! - [`Emphasis`]: Text emphasis (none, bold, underline)
//! - [`Segment`]: One immutable colored block of the prompt chain

/// Abstract color identifiers for segment styling.
///
/// The palette is deliberately small: these are the only colors the prompt
/// chain uses. `Default` stands for the terminal's configured colors and is
/// what the final transition arrow fades into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    HiBlack,
    HiRed,
    HiGreen,
    HiYellow,
    HiBlue,
    Default,
}

impl Color {
    /// SGR code when used as a foreground color
    pub fn fg_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::HiBlack => 90,
            Color::HiRed => 91,
            Color::HiGreen => 92,
            Color::HiYellow => 93,
            Color::HiBlue => 94,
            Color::Default => 39,
        }
    }

    /// SGR code when used as a background color
    pub fn bg_code(self) -> u8 {
        match self {
            Color::Black => 40,
            Color::HiBlack => 100,
            Color::HiRed => 101,
            Color::HiGreen => 102,
            Color::HiYellow => 103,
            Color::HiBlue => 104,
            Color::Default => 49,
        }
    }
}

/// Text emphasis applied to a segment's styled block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    None,
    Bold,
    Underline,
}

impl Emphasis {
    /// Leading SGR parameter for this emphasis
    pub fn sgr_code(self) -> u8 {
        match self {
            Emphasis::None => 0,
            Emphasis::Bold => 1,
            Emphasis::Underline => 4,
        }
    }
}

/// One visual block of the prompt chain.
///
/// Constructed once by the composer, immutable afterwards, and consumed
/// exactly once by the renderer. `text` is never empty: the composer omits
/// segments that would have nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub foreground: Color,
    pub background: Color,
    pub emphasis: Emphasis,
    pub text: String,
}

impl Segment {
    /// Build a bold segment, the default weight for prompt blocks
    pub fn new(foreground: Color, background: Color, text: impl Into<String>) -> Self {
        Segment {
            foreground,
            background,
            emphasis: Emphasis::Bold,
            text: text.into(),
        }
    }

    /// Replace the background color, keeping everything else
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}
