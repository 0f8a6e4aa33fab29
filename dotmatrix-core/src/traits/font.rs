//! Glyph provider trait

/// Maps characters to column bitmaps
///
/// A glyph is an ordered run of column bytes, one per horizontal pixel.
/// Widths may differ per character. Every character must resolve to some
/// glyph: providers return a placeholder (or an empty slice) for
/// characters they do not know.
pub trait GlyphProvider {
    /// Look up the glyph for a character
    fn glyph(&self, ch: char) -> &[u8];

    /// Width of a character's glyph in columns
    fn width(&self, ch: char) -> usize {
        self.glyph(ch).len()
    }
}

impl<T: GlyphProvider + ?Sized> GlyphProvider for &T {
    fn glyph(&self, ch: char) -> &[u8] {
        (**self).glyph(ch)
    }
}
