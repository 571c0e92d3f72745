//! Rotary encoder and five-button panel read by polling GPIO inputs.

use embassy_time::Instant;
use embedded_hal::digital::{Error as _, InputPin};

use super::button::Debouncer;
use super::encoder::RotaryDecoder;
use crate::events::NavEvent;
use crate::{Error, Result};

/// How often the panel is sampled.
pub const POLL_INTERVAL: core::time::Duration = core::time::Duration::from_millis(1);

/// Button events in the order the pins are stored.
const BUTTON_EVENTS: [NavEvent; 5] = [
    NavEvent::Confirm,
    NavEvent::Up,
    NavEvent::Down,
    NavEvent::Left,
    NavEvent::Right,
];

/// The encoder channels plus confirm/up/down/left/right buttons.
///
/// Buttons are wired active low with pull-ups; the encoder rests with both channels high.
pub struct InputPanel<P> {
    encoder_a: P,
    encoder_b: P,
    buttons: [(P, Debouncer); 5],
    decoder: RotaryDecoder,
}

impl<P: InputPin> InputPanel<P> {
    /// Buttons are given as `[confirm, up, down, left, right]`.
    pub fn new(encoder_a: P, encoder_b: P, buttons: [P; 5]) -> Self {
        Self {
            encoder_a,
            encoder_b,
            buttons: buttons.map(|pin| (pin, Debouncer::default())),
            decoder: RotaryDecoder::new(),
        }
    }

    /// Sample every input once and report the events that completed.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be read.
    pub fn poll(&mut self, now: Instant, mut emit: impl FnMut(NavEvent)) -> Result<()> {
        let a = self.encoder_a.is_high().map_err(pin_error)?;
        let b = self.encoder_b.is_high().map_err(pin_error)?;
        if let Some(event) = self.decoder.update(a, b) {
            emit(event);
        }

        for ((pin, debouncer), event) in self.buttons.iter_mut().zip(BUTTON_EVENTS) {
            let pressed = pin.is_low().map_err(pin_error)?;
            if debouncer.update(pressed, now) {
                emit(event);
            }
        }
        Ok(())
    }
}

fn pin_error(err: impl embedded_hal::digital::Error) -> Error {
    Error::Gpio(format!("{:?}", err.kind()))
}

#[cfg(feature = "linux")]
pub use linux::{open, spawn};

#[cfg(feature = "linux")]
mod linux {
    use std::thread::{self, JoinHandle};

    use embassy_time::Instant;
    use linux_embedded_hal::CdevPin;
    use linux_embedded_hal::gpio_cdev::{Chip, LineRequestFlags};
    use log::{error, info};

    use super::{InputPanel, POLL_INTERVAL};
    use crate::config::Config;
    use crate::events::EventSender;
    use crate::{Error, Result};

    const CONSUMER: &str = "segment-clock";

    /// Request every configured line as an input.
    ///
    /// # Errors
    ///
    /// Returns an error if the chip cannot be opened or a line is busy.
    pub fn open(config: &Config) -> Result<InputPanel<CdevPin>> {
        let mut chip = Chip::new(&config.gpio_chip).map_err(cdev_error)?;
        let pins = &config.pins;
        let mut request = |offset: u32| -> Result<CdevPin> {
            let handle = chip
                .get_line(offset)
                .and_then(|line| line.request(LineRequestFlags::INPUT, 0, CONSUMER))
                .map_err(cdev_error)?;
            CdevPin::new(handle).map_err(cdev_error)
        };
        let encoder_a = request(pins.encoder_a)?;
        let encoder_b = request(pins.encoder_b)?;
        let buttons = [
            request(pins.confirm)?,
            request(pins.up)?,
            request(pins.down)?,
            request(pins.left)?,
            request(pins.right)?,
        ];
        info!("GPIO panel opened on {}", config.gpio_chip.display());
        Ok(InputPanel::new(encoder_a, encoder_b, buttons))
    }

    /// Poll the panel on a background thread every [`POLL_INTERVAL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be started.
    pub fn spawn(
        mut panel: InputPanel<CdevPin>,
        sender: EventSender<'static>,
    ) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new().name("gpio".to_owned()).spawn(move || {
            loop {
                if let Err(err) = panel.poll(Instant::now(), |event| sender.send_blocking(event)) {
                    error!("GPIO polling stopped: {err}");
                    return;
                }
                thread::sleep(POLL_INTERVAL);
            }
        })
    }

    fn cdev_error(err: impl core::fmt::Display) -> Error {
        Error::Gpio(err.to_string())
    }
}
