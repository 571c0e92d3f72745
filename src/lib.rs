//! A menu-driven clock for 4-character HT16K33 LED segment displays.
//!
//! The crate is split along the path an input takes: [`input`] sources produce
//! [`events::NavEvent`]s, the [`controller::Controller`] feeds them through the
//! [`menu::MenuState`] machine, and the [`display::SegmentDisplay`] turns the resulting
//! text into frames. Hardware sits behind [`segment_writer::SegmentWriter`],
//! [`network::Network`] and [`clock_time::ZoneClock`] so everything above them runs on any
//! host.

pub mod clock;
pub mod clock_time;
pub mod config;
pub mod controller;
pub mod display;
mod error;
pub mod events;
pub mod frame;
pub mod glyph;
pub mod input;
pub mod menu;
pub mod network;
pub mod segment_writer;
pub mod settings;
pub mod solar;

// Re-export commonly used items
pub use clock::ClockFace;
pub use clock_time::{ClockReading, SystemZoneClock, ZoneClock};
pub use config::Config;
pub use controller::{Controller, ControllerOptions};
pub use display::SegmentDisplay;
pub use error::{Error, Result};
pub use events::{EVENTS, EventQueue, EventSender, NavEvent, SHUTDOWN, ShutdownSignal};
pub use frame::Frame;
pub use glyph::Geometry;
pub use menu::{Effect, MenuItem, MenuState, Screen};
pub use network::{Network, NmcliNetwork, WifiCredentials};
pub use segment_writer::{Ht16k33, SegmentWriter};
pub use settings::{Brightness, Settings, SettingsStore};
