//! Per-device 8x8 rotation
//!
//! The buffer is always column-major with bit 0 at the top. Modules are
//! often mounted turned, so each device's block is rotated just before it
//! is sent.

use dotmatrix_core::config::Rotation;

use super::DIGITS;

/// Rotate one device's columns for transmission
pub fn rotate(columns: &[u8; DIGITS], rotation: Rotation) -> [u8; DIGITS] {
    match rotation {
        Rotation::None => *columns,
        Rotation::Half => core::array::from_fn(|x| columns[DIGITS - 1 - x].reverse_bits()),
        Rotation::Right => core::array::from_fn(|x| {
            // New (x, y) takes old (y, 7 - x)
            let mut out = 0u8;
            for (y, &column) in columns.iter().enumerate() {
                if column & (1 << (DIGITS - 1 - x)) != 0 {
                    out |= 1 << y;
                }
            }
            out
        }),
        Rotation::Left => core::array::from_fn(|x| {
            // New (x, y) takes old (7 - y, x)
            let mut out = 0u8;
            for y in 0..DIGITS {
                if columns[DIGITS - 1 - y] & (1 << x) != 0 {
                    out |= 1 << y;
                }
            }
            out
        }),
    }
}
