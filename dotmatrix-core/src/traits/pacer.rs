//! Step pacing trait
//!
//! Scroll animations wait between steps. The wait is abstracted so that
//! hardware builds block on a delay provider while tests run the whole
//! animation instantly.

use core::time::Duration;

/// A pause was cut short and the animation must stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Interrupted;

/// Timed suspension between animation steps
pub trait StepPacer {
    /// Wait for `delay` before the next step
    ///
    /// Returning `Err(Interrupted)` aborts the running animation; the
    /// caller does not retry or resume.
    fn pause(&mut self, delay: Duration) -> Result<(), Interrupted>;
}

impl<T: StepPacer + ?Sized> StepPacer for &mut T {
    fn pause(&mut self, delay: Duration) -> Result<(), Interrupted> {
        (**self).pause(delay)
    }
}

/// Pacer that never waits
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl StepPacer for NoDelay {
    fn pause(&mut self, _delay: Duration) -> Result<(), Interrupted> {
        Ok(())
    }
}
