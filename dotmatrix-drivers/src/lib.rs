//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in dotmatrix-core:
//!
//! - Pixel devices (MAX7219 cascade over `embedded-hal` SPI)
//! - Glyph providers (5x7 ASCII font, proportional spacing)
//! - Step pacers (`embedded-hal` delay, cooperative cancellation)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod font;
pub mod max7219;
pub mod pacer;

pub use font::{Font5x7, Proportional};
pub use max7219::{Max7219, Max7219Error};
pub use pacer::{CancellablePacer, DelayPacer};
