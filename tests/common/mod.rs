//! Test doubles shared by the integration tests.
#![allow(dead_code, reason = "Each test file uses a different subset")]

use std::collections::BTreeSet;
use std::net::Ipv4Addr;

use segment_clock::clock_time::{ClockReading, ZoneClock};
use segment_clock::frame::{RAM_SIZE, Ram};
use segment_clock::network::{Network, WifiCredentials};
use segment_clock::segment_writer::SegmentWriter;
use segment_clock::{Brightness, Error, Frame, Geometry, Result};

/// Records everything written to the display.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub frames: Vec<Ram>,
    pub brightness: Vec<u8>,
    pub inits: usize,
    /// Fail every frame write with a bus error.
    pub fail_frames: bool,
}

impl RecordingWriter {
    pub fn failing() -> Self {
        Self {
            fail_frames: true,
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> Option<&Ram> {
        self.frames.last()
    }

    /// Frames written after `init`, which blanks the display once.
    pub fn shown(&self) -> &[Ram] {
        self.frames.get(self.inits..).unwrap_or_default()
    }
}

impl SegmentWriter for RecordingWriter {
    fn init(&mut self, brightness: Brightness) -> Result<()> {
        self.inits += 1;
        self.brightness.push(brightness.level());
        self.frames.push([0; RAM_SIZE]);
        Ok(())
    }

    fn write_frame(&mut self, ram: &Ram) -> Result<()> {
        if self.fail_frames {
            return Err(Error::Bus(embedded_hal::i2c::ErrorKind::Bus));
        }
        self.frames.push(*ram);
        Ok(())
    }

    fn set_brightness(&mut self, brightness: Brightness) -> Result<()> {
        self.brightness.push(brightness.level());
        Ok(())
    }
}

/// The RAM image `text` should produce on a 14-segment display.
pub fn ram(text: &str, colon: bool) -> Ram {
    Frame::new(Geometry::FourteenSegment, text, colon).to_ram()
}

/// A scriptable [`Network`].
#[derive(Debug, Default)]
pub struct FakeNetwork {
    pub networks: Vec<String>,
    pub scan_fails: bool,
    pub connect_fails: bool,
    pub address: Option<Ipv4Addr>,
    pub connected: Vec<WifiCredentials>,
}

impl FakeNetwork {
    pub fn with_networks(networks: &[&str]) -> Self {
        Self {
            networks: networks.iter().map(|&ssid| ssid.to_owned()).collect(),
            ..Self::default()
        }
    }
}

impl Network for FakeNetwork {
    fn scan(&mut self) -> Result<BTreeSet<String>> {
        if self.scan_fails {
            return Err(Error::WifiCommand("scan failed".to_owned()));
        }
        Ok(self.networks.iter().cloned().collect())
    }

    fn connect(&mut self, credentials: &WifiCredentials) -> Result<()> {
        self.connected.push(credentials.clone());
        if self.connect_fails {
            return Err(Error::WifiCommand("activation failed".to_owned()));
        }
        Ok(())
    }

    fn primary_address(&mut self) -> Option<Ipv4Addr> {
        self.address
    }
}

/// Always reports the same time in every known zone.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockReading);

impl ZoneClock for FixedClock {
    fn local_time(&self, timezone: &str) -> Result<ClockReading> {
        timezone
            .parse::<chrono_tz::Tz>()
            .map(|_| self.0)
            .map_err(|_| Error::UnknownTimezone(timezone.to_owned()))
    }
}
