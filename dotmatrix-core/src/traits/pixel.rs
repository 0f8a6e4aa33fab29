//! Pixel buffer device trait

/// Cascadable column-oriented pixel buffer
///
/// Each element is one column byte where bit `r` is row `r` (bit 0 at the
/// top). Columns are addressed linearly across every cascaded device:
/// index 0 is the left edge of the combined display and `len() - 1` the
/// right edge.
///
/// Implementations own the buffer. Writes only touch memory until
/// [`flush`](PixelDevice::flush) pushes the buffer to the hardware.
pub trait PixelDevice {
    /// Error type for bus operations
    type Error;

    /// Number of cascaded devices in the chain
    fn cascaded_devices(&self) -> usize;

    /// Number of columns contributed by each device
    fn columns_per_device(&self) -> usize;

    /// Total number of columns across all devices
    fn len(&self) -> usize {
        self.cascaded_devices() * self.columns_per_device()
    }

    /// Check if the buffer has no columns
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the column at a linear index
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn column(&self, index: usize) -> u8;

    /// Write the column at a linear index
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn set_column(&mut self, index: usize, value: u8);

    /// Read a column of a single device
    ///
    /// # Panics
    /// Panics if `device` or `column` is out of range.
    fn device_column(&self, device: usize, column: usize) -> u8 {
        assert!(column < self.columns_per_device());
        self.column(device * self.columns_per_device() + column)
    }

    /// Write a column of a single device
    ///
    /// # Panics
    /// Panics if `device` or `column` is out of range.
    fn set_device_column(&mut self, device: usize, column: usize, value: u8) {
        assert!(column < self.columns_per_device());
        let index = device * self.columns_per_device() + column;
        self.set_column(index, value);
    }

    /// Zero every column, optionally flushing afterwards
    fn clear_all(&mut self, flush: bool) -> Result<(), Self::Error> {
        for index in 0..self.len() {
            self.set_column(index, 0);
        }
        if flush {
            self.flush()?;
        }
        Ok(())
    }

    /// Push the buffered columns to the hardware
    ///
    /// Blocks until the transfer completes.
    fn flush(&mut self) -> Result<(), Self::Error>;
}
