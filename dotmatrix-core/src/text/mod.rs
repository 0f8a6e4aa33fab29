//! Text rendering
//!
//! Composes glyphs into a [`PixelDevice`](crate::traits::PixelDevice)
//! buffer, shifts the buffer one pixel at a time, and shows messages either
//! centered (when they fit) or as a right-to-left scroll.

pub mod error;
pub mod layout;
pub mod shift;
pub mod writer;

#[cfg(test)]
mod mock;

pub use error::TextError;
pub use layout::{centered_margin, source_length, RenderMode};
pub use writer::{RenderOutcome, RenderRequest, TextWriter};
