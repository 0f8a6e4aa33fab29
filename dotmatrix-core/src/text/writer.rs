//! Text writer
//!
//! Owns a pixel device, a font and a step pacer, and renders characters
//! and messages onto the cascaded buffer.

use core::time::Duration;

use super::error::TextError;
use super::layout::{self, RenderMode};
use super::shift;
use crate::config::ScrollConfig;
use crate::traits::{GlyphProvider, NoDelay, PixelDevice, StepPacer};

/// A single message to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest<'a> {
    /// Message text
    pub text: &'a str,
    /// Wait after each scroll step
    pub step_delay: Duration,
    /// Scroll even if the message fits
    pub force_scroll: bool,
}

impl<'a> RenderRequest<'a> {
    /// Request with the default scroll settings
    pub fn new(text: &'a str) -> Self {
        Self::with_config(text, &ScrollConfig::default())
    }

    /// Request using the given scroll settings
    pub fn with_config(text: &'a str, config: &ScrollConfig) -> Self {
        Self {
            text,
            step_delay: config.step_delay(),
            force_scroll: config.always_scroll,
        }
    }

    /// Set the wait after each scroll step
    pub fn step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Force scroll mode
    pub fn force_scroll(mut self, force: bool) -> Self {
        self.force_scroll = force;
        self
    }
}

/// What a completed render did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderOutcome {
    /// Drawn once, first glyph column at `margin`
    Static {
        /// Blank columns left of the message
        margin: usize,
    },
    /// Scrolled through in `steps` shift/flush/pause steps
    Scrolled {
        /// Number of column shifts performed
        steps: usize,
    },
}

/// Text rendering engine for a cascaded pixel device
///
/// The writer has exclusive ownership of the device for its lifetime.
/// Scrolling blocks the caller until the animation finishes or fails.
pub struct TextWriter<D, F, P = NoDelay> {
    device: D,
    font: F,
    pacer: P,
    scroll: ScrollConfig,
}

impl<D: PixelDevice, F: GlyphProvider> TextWriter<D, F, NoDelay> {
    /// Create a writer that never waits between scroll steps
    pub fn unpaced(device: D, font: F) -> Self {
        Self::new(device, font, NoDelay)
    }
}

impl<D: PixelDevice, F: GlyphProvider, P: StepPacer> TextWriter<D, F, P> {
    /// Create a new writer
    pub fn new(device: D, font: F, pacer: P) -> Self {
        Self {
            device,
            font,
            pacer,
            scroll: ScrollConfig::default(),
        }
    }

    /// Use the given scroll settings for [`show`](Self::show)
    pub fn with_scroll_config(mut self, scroll: ScrollConfig) -> Self {
        self.scroll = scroll;
        self
    }

    /// Get access to the underlying device
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Get mutable access to the underlying device
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Get the current font
    pub fn font(&self) -> &F {
        &self.font
    }

    /// Replace the font
    pub fn set_font(&mut self, font: F) {
        self.font = font;
    }

    /// Get the scroll settings
    pub fn scroll_config(&self) -> &ScrollConfig {
        &self.scroll
    }

    /// Release the device, font and pacer
    pub fn into_parts(self) -> (D, F, P) {
        (self.device, self.font, self.pacer)
    }

    /// Width of the whole chain in columns
    pub fn display_length(&self) -> usize {
        self.device.columns_per_device() * self.device.cascaded_devices()
    }

    /// Write one character to a single device
    ///
    /// Columns beyond the glyph width, or glyph columns beyond the device
    /// width, are left as they are.
    pub fn write_glyph(
        &mut self,
        device: usize,
        ch: char,
        flush: bool,
    ) -> Result<(), TextError<D::Error>> {
        let cascaded = self.device.cascaded_devices();
        if device >= cascaded {
            return Err(TextError::OutOfRange {
                index: device,
                len: cascaded,
            });
        }

        let glyph = self.font.glyph(ch);
        let end = glyph.len().min(self.device.columns_per_device());
        for (column, &bits) in glyph[..end].iter().enumerate() {
            self.device.set_device_column(device, column, bits);
        }

        if flush {
            self.device.flush().map_err(TextError::Device)?;
        }
        Ok(())
    }

    /// Move all content up one pixel row
    pub fn shift_up(&mut self, flush: bool) -> Result<(), TextError<D::Error>> {
        shift::up(&mut self.device);
        self.flush_if(flush)
    }

    /// Move all content down one pixel row
    pub fn shift_down(&mut self, flush: bool) -> Result<(), TextError<D::Error>> {
        shift::down(&mut self.device);
        self.flush_if(flush)
    }

    /// Move all content left one column, `incoming` entering at the right
    ///
    /// Returns the column that left the display.
    pub fn shift_left(&mut self, incoming: u8, flush: bool) -> Result<u8, TextError<D::Error>> {
        let evicted = shift::left(&mut self.device, incoming);
        self.flush_if(flush)?;
        Ok(evicted)
    }

    /// Move all content right one column, `incoming` entering at the left
    ///
    /// Returns the column that left the display.
    pub fn shift_right(&mut self, incoming: u8, flush: bool) -> Result<u8, TextError<D::Error>> {
        let evicted = shift::right(&mut self.device, incoming);
        self.flush_if(flush)?;
        Ok(evicted)
    }

    /// Show a message with the writer's scroll settings
    pub fn show(&mut self, text: &str) -> Result<RenderOutcome, TextError<D::Error>> {
        let request = RenderRequest::with_config(text, &self.scroll);
        self.render(&request)
    }

    /// Show a message, centered if it fits, scrolled otherwise
    pub fn show_message(
        &mut self,
        text: &str,
        step_delay: Duration,
        force_scroll: bool,
    ) -> Result<RenderOutcome, TextError<D::Error>> {
        let request = RenderRequest {
            text,
            step_delay,
            force_scroll,
        };
        self.render(&request)
    }

    /// Render a message request
    ///
    /// In scroll mode this returns once the last column has left the
    /// display on the left.
    pub fn render(
        &mut self,
        request: &RenderRequest<'_>,
    ) -> Result<RenderOutcome, TextError<D::Error>> {
        let display = self.display_length();
        let source = layout::source_length(&self.font, request.text);

        match RenderMode::decide(source, display, request.force_scroll) {
            RenderMode::Static => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Static text: {} of {} columns", source, display);
                self.render_static(request.text, source)
            }
            RenderMode::Scroll => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Scrolling text: {} columns over {}", source, display);
                self.render_scroll(request.text, request.step_delay)
            }
        }
    }

    fn render_static(
        &mut self,
        text: &str,
        source: usize,
    ) -> Result<RenderOutcome, TextError<D::Error>> {
        let display = self.display_length();
        let margin = layout::centered_margin(display, source)
            .ok_or(TextError::NegativeMargin { display, source })?;

        self.device.clear_all(false).map_err(TextError::Device)?;

        let mut pos = margin;
        for ch in text.chars() {
            for &bits in self.font.glyph(ch) {
                if pos >= display {
                    return Err(TextError::OutOfRange {
                        index: pos,
                        len: display,
                    });
                }
                self.device.set_column(pos, bits);
                pos += 1;
            }
            // Gap column: already blank from the clear
            pos += 1;
        }

        self.device.flush().map_err(TextError::Device)?;
        Ok(RenderOutcome::Static { margin })
    }

    fn render_scroll(
        &mut self,
        text: &str,
        delay: Duration,
    ) -> Result<RenderOutcome, TextError<D::Error>> {
        let display = self.display_length();
        self.device.clear_all(false).map_err(TextError::Device)?;

        let mut steps = 0;
        for ch in text.chars() {
            for &bits in self.font.glyph(ch) {
                scroll_step(&mut self.device, &mut self.pacer, bits, delay)?;
                steps += 1;
            }
            scroll_step(&mut self.device, &mut self.pacer, 0, delay)?;
            steps += 1;
        }

        // Drain until the last column has left the display
        for _ in 1..display {
            scroll_step(&mut self.device, &mut self.pacer, 0, delay)?;
            steps += 1;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("Scroll finished after {} steps", steps);
        Ok(RenderOutcome::Scrolled { steps })
    }

    fn flush_if(&mut self, flush: bool) -> Result<(), TextError<D::Error>> {
        if flush {
            self.device.flush().map_err(TextError::Device)?;
        }
        Ok(())
    }
}

/// Shift one column in, flush, then wait
fn scroll_step<D: PixelDevice, P: StepPacer>(
    device: &mut D,
    pacer: &mut P,
    incoming: u8,
    delay: Duration,
) -> Result<(), TextError<D::Error>> {
    shift::left(device, incoming);
    device.flush().map_err(TextError::Device)?;
    pacer.pause(delay)?;
    Ok(())
}
