//! Step pacer implementations

use core::time::Duration;

use dotmatrix_core::traits::{Interrupted, StepPacer};
use embedded_hal::delay::DelayNs;
use portable_atomic::{AtomicBool, Ordering};

/// Blocking pacer backed by an `embedded-hal` delay
///
/// Waits are rounded down to whole microseconds. Waits too long to count
/// in microseconds fall back to whole milliseconds.
pub struct DelayPacer<D> {
    delay: D,
}

impl<D: DelayNs> DelayPacer<D> {
    /// Create a new pacer
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    /// Release the delay provider
    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> StepPacer for DelayPacer<D> {
    fn pause(&mut self, delay: Duration) -> Result<(), Interrupted> {
        match u32::try_from(delay.as_micros()) {
            Ok(us) => self.delay.delay_us(us),
            Err(_) => {
                let ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                self.delay.delay_ms(ms);
            }
        }
        Ok(())
    }
}

/// Pacer that stops an animation once a flag is raised
///
/// The flag is checked before every wait, so a running scroll ends at the
/// next step boundary. The flag stays raised until the owner clears it.
pub struct CancellablePacer<'a, P> {
    inner: P,
    cancel: &'a AtomicBool,
}

impl<'a, P: StepPacer> CancellablePacer<'a, P> {
    /// Wrap a pacer with a cancellation flag
    pub fn new(inner: P, cancel: &'a AtomicBool) -> Self {
        Self { inner, cancel }
    }

    /// Check if cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Acquire)
    }
}

impl<P: StepPacer> StepPacer for CancellablePacer<'_, P> {
    fn pause(&mut self, delay: Duration) -> Result<(), Interrupted> {
        if self.is_cancelled() {
            #[cfg(feature = "defmt")]
            defmt::debug!("Animation cancelled");
            return Err(Interrupted);
        }
        self.inner.pause(delay)
    }
}
