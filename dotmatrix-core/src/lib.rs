//! Board-agnostic text rendering for cascaded LED dot-matrix displays
//!
//! This crate contains all rendering logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (pixel buffer device, glyph provider, step pacer)
//! - Buffer shift primitives (up, down, left, right)
//! - Message layout math (source width, centering margin, scroll decision)
//! - The [`TextWriter`] engine that centers or scrolls text
//! - Configuration type definitions
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application                            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dotmatrix-core (TextWriter, traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┼───────────┐
//!         ▼           ▼           ▼
//!   PixelDevice  GlyphProvider  StepPacer
//!   (MAX7219)    (Font5x7)      (DelayNs)
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod text;
pub mod traits;

pub use text::{RenderMode, RenderOutcome, RenderRequest, TextError, TextWriter};
pub use traits::{GlyphProvider, Interrupted, NoDelay, PixelDevice, StepPacer};
