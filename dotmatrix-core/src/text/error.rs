//! Text rendering errors

use crate::traits::Interrupted;

/// Errors raised while writing to the pixel buffer
///
/// None of these are retried. A failed step leaves the buffer as it was
/// after the last successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextError<E> {
    /// Index outside the buffer (or device outside the chain)
    OutOfRange {
        /// Requested index
        index: usize,
        /// Number of valid indices
        len: usize,
    },
    /// Centered layout requested for text wider than the display
    NegativeMargin {
        /// Display width in columns
        display: usize,
        /// Message width in columns
        source: usize,
    },
    /// Device clear or flush failed
    Device(E),
    /// Step pacer cut the animation short
    Interrupted,
}

impl<E> From<Interrupted> for TextError<E> {
    fn from(_: Interrupted) -> Self {
        TextError::Interrupted
    }
}
