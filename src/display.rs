//! Frame renderer: turns short strings into display frames and scrolls long ones.

use embassy_time::{Duration, Timer};
#[cfg(feature = "display-trace")]
use log::info;
use log::warn;

use crate::Result;
use crate::frame::{CELL_COUNT, Frame};
use crate::glyph::Geometry;
use crate::segment_writer::SegmentWriter;
use crate::settings::Brightness;

/// A 4-cell segment display with a fixed geometry.
///
/// This is the only writer of display frames. Bus faults while showing text are logged
/// and the frame is skipped; the next render tries again.
pub struct SegmentDisplay<W> {
    writer: W,
    geometry: Geometry,
    scroll_delay: Duration,
    colon: bool,
}

impl<W: SegmentWriter> SegmentDisplay<W> {
    /// Initialize the controller and blank the display.
    ///
    /// # Errors
    ///
    /// Returns an error if the controller does not accept the init sequence.
    pub fn new(
        mut writer: W,
        geometry: Geometry,
        scroll_delay: Duration,
        brightness: Brightness,
    ) -> Result<Self> {
        writer.init(brightness)?;
        Ok(Self {
            writer,
            geometry,
            scroll_delay,
            colon: false,
        })
    }

    /// Colon flag applied to subsequent frames.
    pub const fn set_colon(&mut self, colon: bool) {
        self.colon = colon;
    }

    /// Show `text`.
    ///
    /// Up to four characters are padded with trailing spaces and written as one frame.
    /// Longer text scrolls one cell at a time, pausing `scroll_delay` between windows;
    /// the last window stays shown.
    pub async fn display(&mut self, text: &str) {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() <= CELL_COUNT {
            self.show(&chars);
            return;
        }

        let mut windows = chars.windows(CELL_COUNT).peekable();
        while let Some(window) = windows.next() {
            self.show(window);
            if windows.peek().is_some() && self.scroll_delay.as_ticks() > 0 {
                Timer::after(self.scroll_delay).await;
            }
        }
    }

    /// Set the dimming level.
    pub fn set_brightness(&mut self, brightness: Brightness) {
        if let Err(err) = self.writer.set_brightness(brightness) {
            warn!("Could not set brightness {}: {err}", brightness.level());
        }
    }

    /// Blank every cell and the colon.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    pub fn clear(&mut self) -> Result<()> {
        self.writer.clear()
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    fn show(&mut self, window: &[char]) {
        let frame = Frame::from_text(self.geometry, window, self.colon);
        #[cfg(feature = "display-trace")]
        info!("frame {window:?} colon={}", self.colon);
        if let Err(err) = self.writer.write_frame(&frame.to_ram()) {
            warn!("Skipping frame: {err}");
        }
    }
}
