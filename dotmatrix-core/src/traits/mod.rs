//! Collaborator traits
//!
//! These traits define the interface between the rendering engine
//! and hardware-specific implementations.

pub mod font;
pub mod pacer;
pub mod pixel;

pub use font::GlyphProvider;
pub use pacer::{Interrupted, NoDelay, StepPacer};
pub use pixel::PixelDevice;
