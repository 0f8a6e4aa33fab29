//! Message layout math
//!
//! A message occupies the sum of its glyph widths plus one blank column
//! between neighbouring glyphs. Messages that fit the display are
//! centered; wider ones (or forced ones) scroll.

use crate::traits::GlyphProvider;

/// How a message is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderMode {
    /// Single centered frame
    Static,
    /// Right-to-left scroll, one column per step
    Scroll,
}

impl RenderMode {
    /// Choose the mode for a message
    ///
    /// A message exactly as wide as the display is still shown static.
    pub fn decide(source_length: usize, display_length: usize, force_scroll: bool) -> Self {
        if force_scroll || source_length > display_length {
            RenderMode::Scroll
        } else {
            RenderMode::Static
        }
    }
}

/// Width of a message in columns, including inter-glyph gaps
///
/// Glyphs are looked up one character at a time; nothing is buffered.
/// Empty text has zero width.
pub fn source_length<F: GlyphProvider + ?Sized>(font: &F, text: &str) -> usize {
    let (columns, chars) = text
        .chars()
        .fold((0usize, 0usize), |(columns, chars), ch| {
            (columns + font.width(ch), chars + 1)
        });
    columns + chars.saturating_sub(1)
}

/// First column of a centered message
///
/// Returns `None` if the message is wider than the display.
pub fn centered_margin(display_length: usize, source_length: usize) -> Option<usize> {
    display_length
        .checked_sub(source_length)
        .map(|spare| spare / 2)
}
