//! Proportional spacing
//!
//! Trims blank columns from both sides of a fixed-width glyph so narrow
//! characters like `i` or `.` take less room when scrolled.

use dotmatrix_core::traits::GlyphProvider;

/// Default width of an all-blank glyph (space)
pub const DEFAULT_SPACE_WIDTH: usize = 2;

/// Wraps a glyph provider and trims leading and trailing blank columns
///
/// Blank glyphs keep `space_width` columns so words stay apart.
#[derive(Debug, Clone, Copy)]
pub struct Proportional<F> {
    inner: F,
    space_width: usize,
}

impl<F: GlyphProvider> Proportional<F> {
    /// Wrap a provider with the default space width
    pub fn new(inner: F) -> Self {
        Self::with_space_width(inner, DEFAULT_SPACE_WIDTH)
    }

    /// Wrap a provider with a custom space width
    pub fn with_space_width(inner: F, space_width: usize) -> Self {
        Self { inner, space_width }
    }

    /// Get access to the wrapped provider
    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: GlyphProvider> GlyphProvider for Proportional<F> {
    fn glyph(&self, ch: char) -> &[u8] {
        let glyph = self.inner.glyph(ch);
        let first = glyph.iter().position(|&c| c != 0);
        let last = glyph.iter().rposition(|&c| c != 0);

        match (first, last) {
            (Some(first), Some(last)) => &glyph[first..=last],
            _ => &glyph[..self.space_width.min(glyph.len())],
        }
    }
}
