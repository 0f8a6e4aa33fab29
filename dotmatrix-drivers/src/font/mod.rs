//! Glyph provider implementations

pub mod font5x7;
pub mod proportional;

pub use font5x7::{Font5x7, FONT_5X7};
pub use proportional::Proportional;
