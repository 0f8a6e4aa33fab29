//! Configuration type definitions
//!
//! These types describe a display chain and how text is animated on it.

use core::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of cascaded devices in one chain
pub const MAX_CASCADED: usize = 32;

/// Highest intensity level accepted by the controller
pub const MAX_INTENSITY: u8 = 15;

/// Default delay between scroll steps in milliseconds
pub const DEFAULT_STEP_DELAY_MS: u16 = 50;

/// Orientation of each 8x8 device relative to the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// Columns map straight to digit registers
    #[default]
    None,
    /// Rotated 90° counter-clockwise
    Left,
    /// Rotated 90° clockwise
    Right,
    /// Rotated 180°
    Half,
}

/// Scroll animation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScrollConfig {
    /// Delay between column shifts (ms)
    pub step_delay_ms: u16,
    /// Scroll even when the text fits the display
    pub always_scroll: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            always_scroll: false,
        }
    }
}

impl ScrollConfig {
    /// Step delay as a duration
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms as u64)
    }
}

/// Display chain configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatrixConfig {
    /// Number of cascaded devices (1-32)
    pub cascaded: u8,
    /// LED intensity (0-15)
    pub intensity: u8,
    /// Device orientation
    pub rotation: Rotation,
    /// Scroll settings
    pub scroll: ScrollConfig,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            cascaded: 4,
            intensity: 4,
            rotation: Rotation::None,
            scroll: ScrollConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Cascade count is zero or above [`MAX_CASCADED`]
    InvalidCascade,
    /// Intensity above [`MAX_INTENSITY`]
    InvalidIntensity,
    /// Serialization failed (buffer too small)
    Encode,
    /// Stored bytes could not be decoded
    Decode,
}

impl MatrixConfig {
    /// Check that every field is within the controller's limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cascaded == 0 || self.cascaded as usize > MAX_CASCADED {
            return Err(ConfigError::InvalidCascade);
        }
        if self.intensity > MAX_INTENSITY {
            return Err(ConfigError::InvalidIntensity);
        }
        Ok(())
    }

    /// Serialize to postcard bytes
    ///
    /// Returns the used part of `buf`.
    #[cfg(feature = "serde")]
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Encode)
    }

    /// Deserialize from postcard bytes and validate
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }
}
