//! Buffer shift primitives
//!
//! Each shift walks the whole cascaded buffer once, in place. None of them
//! flush; [`TextWriter`](super::TextWriter) adds that.

use crate::traits::PixelDevice;

/// Move content up one row
///
/// Bit 0 (top row) falls off, bit 7 (bottom row) becomes blank.
pub fn up<D: PixelDevice + ?Sized>(device: &mut D) {
    for index in 0..device.len() {
        let column = device.column(index);
        device.set_column(index, column >> 1);
    }
}

/// Move content down one row
///
/// Bit 7 (bottom row) falls off, bit 0 (top row) becomes blank.
pub fn down<D: PixelDevice + ?Sized>(device: &mut D) {
    for index in 0..device.len() {
        let column = device.column(index);
        device.set_column(index, column << 1);
    }
}

/// Move content left one column, feeding `incoming` at the right edge
///
/// Returns the column pushed out at index 0.
pub fn left<D: PixelDevice + ?Sized>(device: &mut D, incoming: u8) -> u8 {
    let len = device.len();
    if len == 0 {
        return incoming;
    }

    let evicted = device.column(0);
    // Ascending: index - 1 has already been read when it is overwritten
    for index in 1..len {
        let column = device.column(index);
        device.set_column(index - 1, column);
    }
    device.set_column(len - 1, incoming);
    evicted
}

/// Move content right one column, feeding `incoming` at the left edge
///
/// Returns the column pushed out at the last index.
pub fn right<D: PixelDevice + ?Sized>(device: &mut D, incoming: u8) -> u8 {
    let len = device.len();
    if len == 0 {
        return incoming;
    }

    let evicted = device.column(len - 1);
    // Descending: mirror of `left`
    for index in (1..len).rev() {
        let column = device.column(index - 1);
        device.set_column(index, column);
    }
    device.set_column(0, incoming);
    evicted
}
