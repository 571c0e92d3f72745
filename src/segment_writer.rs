//! Bus-level access to the HT16K33 LED controller behind the segment display.

use embedded_hal::i2c::{Error as _, I2c};

use crate::frame::{RAM_SIZE, Ram};
use crate::settings::Brightness;
use crate::{Error, Result};

/// The most common HT16K33 backpack address.
pub const DEFAULT_ADDRESS: u8 = 0x70;

// HT16K33 command bytes
const OSCILLATOR_ON: u8 = 0x21;
const DISPLAY_ON_NO_BLINK: u8 = 0x81;
const BRIGHTNESS: u8 = 0xE0;
const RAM_START: u8 = 0x00;

/// Writes whole frames and brightness levels to a segment display controller.
///
/// Every [`write_frame`](SegmentWriter::write_frame) must reach the controller as one bus
/// transaction so a partially updated frame is never visible.
pub trait SegmentWriter {
    /// Start the controller, set the initial brightness and blank the display.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn init(&mut self, brightness: Brightness) -> Result<()>;

    /// Replace the whole display RAM.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn write_frame(&mut self, ram: &Ram) -> Result<()>;

    /// Set the dimming level.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn set_brightness(&mut self, brightness: Brightness) -> Result<()>;

    /// Blank the display.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn clear(&mut self) -> Result<()> {
        self.write_frame(&[0; RAM_SIZE])
    }
}

/// HT16K33 driver over any blocking `embedded-hal` I2C bus.
pub struct Ht16k33<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Ht16k33<I2C> {
    /// Wrap a bus. Call [`SegmentWriter::init`] before writing frames.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    fn command(&mut self, command: u8) -> Result<()> {
        self.i2c
            .write(self.address, &[command])
            .map_err(|err| Error::Bus(err.kind()))
    }
}

impl<I2C: I2c> SegmentWriter for Ht16k33<I2C> {
    fn init(&mut self, brightness: Brightness) -> Result<()> {
        self.command(OSCILLATOR_ON)?;
        self.command(DISPLAY_ON_NO_BLINK)?;
        self.set_brightness(brightness)?;
        self.clear()
    }

    fn write_frame(&mut self, ram: &Ram) -> Result<()> {
        // The first byte is the RAM start address; the rest is the frame.
        let mut block = [RAM_START; RAM_SIZE + 1];
        for (dst, &src) in block.iter_mut().skip(1).zip(ram) {
            *dst = src;
        }
        self.i2c
            .write(self.address, &block)
            .map_err(|err| Error::Bus(err.kind()))
    }

    fn set_brightness(&mut self, brightness: Brightness) -> Result<()> {
        self.command(BRIGHTNESS | brightness.level())
    }
}
