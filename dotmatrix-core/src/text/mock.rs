//! Test doubles shared by the text module tests

use core::cell::RefCell;
use core::time::Duration;
use std::vec::Vec;

use crate::traits::{GlyphProvider, Interrupted, PixelDevice, StepPacer};

/// Observable side effects, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Buffer contents at flush time
    Flush(Vec<u8>),
    /// Pacer wait
    Pause(Duration),
}

pub type Log = RefCell<Vec<Event>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlushFailed;

/// In-memory pixel buffer
pub struct MockDevice<'a> {
    pub columns: Vec<u8>,
    cascaded: usize,
    per_device: usize,
    log: Option<&'a Log>,
    flushes: usize,
    /// Fail the flush with this (zero-based) number
    pub fail_flush: Option<usize>,
}

impl<'a> MockDevice<'a> {
    pub fn new(cascaded: usize, per_device: usize) -> Self {
        Self {
            columns: std::vec![0; cascaded * per_device],
            cascaded,
            per_device,
            log: None,
            flushes: 0,
            fail_flush: None,
        }
    }

    /// One single-column device per byte
    pub fn from_columns(columns: &[u8]) -> Self {
        let mut device = Self::new(columns.len(), 1);
        device.columns.copy_from_slice(columns);
        device
    }

    pub fn with_log(mut self, log: &'a Log) -> Self {
        self.log = Some(log);
        self
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl PixelDevice for MockDevice<'_> {
    type Error = FlushFailed;

    fn cascaded_devices(&self) -> usize {
        self.cascaded
    }

    fn columns_per_device(&self) -> usize {
        self.per_device
    }

    fn column(&self, index: usize) -> u8 {
        self.columns[index]
    }

    fn set_column(&mut self, index: usize, value: u8) {
        self.columns[index] = value;
    }

    fn flush(&mut self) -> Result<(), FlushFailed> {
        if self.fail_flush == Some(self.flushes) {
            return Err(FlushFailed);
        }
        self.flushes += 1;
        if let Some(log) = self.log {
            log.borrow_mut().push(Event::Flush(self.columns.clone()));
        }
        Ok(())
    }
}

/// Pacer that records waits instead of sleeping
pub struct MockPacer<'a> {
    log: &'a Log,
    pauses: usize,
    /// Interrupt the pause with this (zero-based) number
    pub interrupt_at: Option<usize>,
}

impl<'a> MockPacer<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self {
            log,
            pauses: 0,
            interrupt_at: None,
        }
    }
}

impl StepPacer for MockPacer<'_> {
    fn pause(&mut self, delay: Duration) -> Result<(), Interrupted> {
        if self.interrupt_at == Some(self.pauses) {
            return Err(Interrupted);
        }
        self.pauses += 1;
        self.log.borrow_mut().push(Event::Pause(delay));
        Ok(())
    }
}

/// Font with a handful of fixed test glyphs
///
/// - `I`: one column `0xFF`
/// - `W`: four columns `1..=4`
/// - `M`: five columns `5..=9`
/// - `L`: ten columns `1..=10`
/// - anything else: two columns `0x55, 0xAA`
pub struct MockFont;

impl GlyphProvider for MockFont {
    fn glyph(&self, ch: char) -> &[u8] {
        match ch {
            'I' => &[0xFF],
            'W' => &[1, 2, 3, 4],
            'M' => &[5, 6, 7, 8, 9],
            'L' => &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
            _ => &[0x55, 0xAA],
        }
    }
}

pub fn flush_count(log: &Log) -> usize {
    log.borrow()
        .iter()
        .filter(|e| matches!(e, Event::Flush(_)))
        .count()
}

pub fn pause_count(log: &Log) -> usize {
    log.borrow()
        .iter()
        .filter(|e| matches!(e, Event::Pause(_)))
        .count()
}
