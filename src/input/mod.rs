//! Event sources: the GPIO encoder panel and the keyboard fallback.
//!
//! Sources run on their own threads and only ever enqueue [`NavEvent`](crate::events::NavEvent)s.

pub mod button;
pub mod encoder;
pub mod gpio;
pub mod keyboard;

pub use button::{BUTTON_DEBOUNCE_DELAY, Debouncer};
pub use encoder::RotaryDecoder;
pub use gpio::InputPanel;
pub use keyboard::parse_line;
