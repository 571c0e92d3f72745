//! Quadrature decoding for a detented rotary encoder.

use crate::events::NavEvent;

/// Both channels high: the position every detent rests in.
const REST: u8 = 0b11;

/// Counts quarter steps and reports one event per completed detent.
///
/// Contact bounce moves the count back and forth without ever completing a detent, so it
/// produces no events.
#[derive(Debug, Clone, Copy)]
pub struct RotaryDecoder {
    state: u8,
    steps: i8,
}

impl Default for RotaryDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RotaryDecoder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: REST,
            steps: 0,
        }
    }

    /// Feed the current level of channels A and B (true = high).
    ///
    /// Clockwise rotation yields [`NavEvent::Up`], counter-clockwise [`NavEvent::Down`].
    pub fn update(&mut self, a: bool, b: bool) -> Option<NavEvent> {
        let next = (u8::from(a) << 1) | u8::from(b);
        if next == self.state {
            return None;
        }
        self.steps = self.steps.saturating_add(step(self.state, next));
        self.state = next;

        if next != REST {
            return None;
        }
        let steps = core::mem::take(&mut self.steps);
        match steps {
            2.. => Some(NavEvent::Up),
            ..=-2 => Some(NavEvent::Down),
            _ => None,
        }
    }
}

/// +1 for a clockwise quarter step, -1 for counter-clockwise, 0 for an invalid jump.
const fn step(from: u8, to: u8) -> i8 {
    match (from, to) {
        (0b11, 0b01) | (0b01, 0b00) | (0b00, 0b10) | (0b10, 0b11) => 1,
        (0b11, 0b10) | (0b10, 0b00) | (0b00, 0b01) | (0b01, 0b11) => -1,
        _ => 0,
    }
}
