//! MAX7219 LED matrix driver (SPI)
//!
//! The MAX7219 drives an 8x8 LED matrix through eight digit registers.
//! Devices are daisy-chained: every 16-bit word shifted in pushes the
//! previous one to the next device, and raising chip select latches all of
//! them at once.
//!
//! # SPI Protocol
//!
//! Each device takes a 2-byte word per latch:
//! - Register address (`0x0` - `0xF`)
//! - Data byte
//!
//! One chip-select frame carries one word per device. The word for the
//! device furthest from the controller goes first, so device 0 receives
//! the last word of the frame.
//!
//! # Buffer layout
//!
//! Device `d` owns columns `8 * d .. 8 * d + 8` of the linear buffer, and
//! column `c` of a device is sent as digit register `c`.

mod rotate;

pub use rotate::rotate;

use dotmatrix_core::config::{MatrixConfig, Rotation, MAX_CASCADED, MAX_INTENSITY};
use dotmatrix_core::traits::PixelDevice;
use embedded_hal::spi::SpiDevice;
use heapless::Vec;

/// MAX7219 register addresses
pub mod reg {
    /// First digit (column) register, digits 0-7 are consecutive
    pub const DIGIT0: u8 = 0x01;
    /// BCD decode mode per digit
    pub const DECODE_MODE: u8 = 0x09;
    /// LED intensity (0-15)
    pub const INTENSITY: u8 = 0x0A;
    /// Number of scanned digits minus one
    pub const SCAN_LIMIT: u8 = 0x0B;
    /// Shutdown (0) / normal operation (1)
    pub const SHUTDOWN: u8 = 0x0C;
    /// Display test, all LEDs on (1)
    pub const DISPLAY_TEST: u8 = 0x0F;
}

/// Columns (digit registers) per device
pub const DIGITS: usize = 8;

/// Largest chip-select frame: one word per device
const FRAME_LEN: usize = 2 * MAX_CASCADED;

/// MAX7219 driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Max7219Error<E> {
    /// SPI transfer failed
    Spi(E),
    /// Cascade count is zero or above [`MAX_CASCADED`]
    InvalidCascade(usize),
    /// Intensity above [`MAX_INTENSITY`]
    InvalidIntensity(u8),
}

/// Cascaded MAX7219 chain
///
/// Holds the column buffer for every device. Writes through
/// [`PixelDevice`] only touch the buffer; [`PixelDevice::flush`] sends it.
pub struct Max7219<SPI> {
    spi: SPI,
    buffer: Vec<[u8; DIGITS], MAX_CASCADED>,
    rotation: Rotation,
}

impl<SPI: SpiDevice> Max7219<SPI> {
    /// Create a driver for `cascaded` chained devices
    ///
    /// Nothing is sent until [`init`](Self::init) or a flush.
    pub fn new(spi: SPI, cascaded: usize) -> Result<Self, Max7219Error<SPI::Error>> {
        if cascaded == 0 || cascaded > MAX_CASCADED {
            return Err(Max7219Error::InvalidCascade(cascaded));
        }

        // Capacity checked above
        let buffer = core::iter::repeat([0; DIGITS]).take(cascaded).collect();

        Ok(Self {
            spi,
            buffer,
            rotation: Rotation::None,
        })
    }

    /// Create and initialize a driver from a chain configuration
    pub fn from_config(spi: SPI, config: &MatrixConfig) -> Result<Self, Max7219Error<SPI::Error>> {
        let mut driver = Self::new(spi, config.cascaded as usize)?;
        driver.set_rotation(config.rotation);
        driver.init(config.intensity)?;
        Ok(driver)
    }

    /// Initialize every device in the chain
    ///
    /// Sets a full 8-digit scan without BCD decode, leaves display test,
    /// applies the intensity, wakes the devices and blanks them.
    pub fn init(&mut self, intensity: u8) -> Result<(), Max7219Error<SPI::Error>> {
        if intensity > MAX_INTENSITY {
            return Err(Max7219Error::InvalidIntensity(intensity));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("MAX7219 init: {} devices", self.buffer.len());

        self.set_register(reg::SCAN_LIMIT, (DIGITS - 1) as u8)?;
        self.set_register(reg::DECODE_MODE, 0)?;
        self.set_register(reg::DISPLAY_TEST, 0)?;
        self.set_register(reg::INTENSITY, intensity)?;
        self.set_register(reg::SHUTDOWN, 1)?;
        self.clear_all(true)
    }

    /// Write the same register value to every device
    pub fn set_register(&mut self, register: u8, value: u8) -> Result<(), Max7219Error<SPI::Error>> {
        let count = self.buffer.len();
        self.write_frame((0..count).map(|_| (register, value)))
    }

    /// Set LED intensity (0-15) on every device
    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), Max7219Error<SPI::Error>> {
        if intensity > MAX_INTENSITY {
            return Err(Max7219Error::InvalidIntensity(intensity));
        }
        self.set_register(reg::INTENSITY, intensity)
    }

    /// Light every LED regardless of the buffer
    pub fn set_display_test(&mut self, on: bool) -> Result<(), Max7219Error<SPI::Error>> {
        self.set_register(reg::DISPLAY_TEST, on as u8)
    }

    /// Turn the display on (normal operation) or off (shutdown)
    pub fn set_enabled(&mut self, on: bool) -> Result<(), Max7219Error<SPI::Error>> {
        self.set_register(reg::SHUTDOWN, on as u8)
    }

    /// Get the device orientation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Set the device orientation, applied on the next flush
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Release the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Send one word per device in a single chip-select frame
    ///
    /// `words` yields device 0 first; the frame is sent last device first.
    fn write_frame(
        &mut self,
        words: impl DoubleEndedIterator<Item = (u8, u8)>,
    ) -> Result<(), Max7219Error<SPI::Error>> {
        // At most one word per device, capacity covers MAX_CASCADED
        let frame: Vec<u8, FRAME_LEN> = words
            .rev()
            .flat_map(|(register, value)| [register, value])
            .collect();
        self.spi.write(&frame).map_err(Max7219Error::Spi)
    }
}

impl<SPI: SpiDevice> PixelDevice for Max7219<SPI> {
    type Error = Max7219Error<SPI::Error>;

    fn cascaded_devices(&self) -> usize {
        self.buffer.len()
    }

    fn columns_per_device(&self) -> usize {
        DIGITS
    }

    fn column(&self, index: usize) -> u8 {
        self.buffer[index / DIGITS][index % DIGITS]
    }

    fn set_column(&mut self, index: usize, value: u8) {
        self.buffer[index / DIGITS][index % DIGITS] = value;
    }

    fn clear_all(&mut self, flush: bool) -> Result<(), Self::Error> {
        for device in self.buffer.iter_mut() {
            device.fill(0);
        }
        if flush {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let rotation = self.rotation;
        let blocks: Vec<[u8; DIGITS], MAX_CASCADED> = self
            .buffer
            .iter()
            .map(|columns| rotate(columns, rotation))
            .collect();

        for digit in 0..DIGITS {
            let register = reg::DIGIT0 + digit as u8;
            self.write_frame(blocks.iter().map(|block| (register, block[digit])))?;
        }
        Ok(())
    }
}
