// Sometimes the start (and end) of a press is "noisy": the contacts flicker between touching
// and not touching for a few milliseconds. A level only counts once it has held steady for
// the whole debounce window.

use embassy_time::{Duration, Instant};

pub const BUTTON_DEBOUNCE_DELAY: Duration = Duration::from_millis(10);

/// Turns raw button samples into one press per physical press.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    raw: bool,
    raw_since: Instant,
    stable: bool,
    window: Duration,
}

impl Debouncer {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            raw: false,
            raw_since: Instant::from_ticks(0),
            stable: false,
            window,
        }
    }

    /// Feed one sample (true = pressed). Returns true exactly once per debounced press.
    pub fn update(&mut self, pressed: bool, now: Instant) -> bool {
        if pressed != self.raw {
            self.raw = pressed;
            self.raw_since = now;
            return false;
        }
        if self.raw == self.stable
            || now.saturating_duration_since(self.raw_since) < self.window
        {
            return false;
        }
        self.stable = self.raw;
        self.stable
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(BUTTON_DEBOUNCE_DELAY)
    }
}
