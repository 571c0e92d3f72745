//! The control loop: one owner for the display, the settings and the menu state.
//!
//! Events and once-a-second ticks are handled strictly one at a time. While a long message
//! scrolls or a Wi-Fi join runs, new events wait in the queue.

use core::mem;

use embassy_futures::select::{Either3, select3};
use embassy_time::{Duration, Timer};
use log::{info, warn};

use crate::clock::ClockFace;
use crate::clock_time::{ClockReading, ZoneClock};
use crate::config::Config;
use crate::display::SegmentDisplay;
use crate::events::{EventQueue, NavEvent, ShutdownSignal};
use crate::menu::{Effect, MenuState, Screen};
use crate::network::Network;
use crate::segment_writer::SegmentWriter;
use crate::settings::{Brightness, Settings, SettingsStore};
use crate::solar::{self, Location};

/// Tunables for [`Controller`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerOptions {
    /// How long announcements stay on the display.
    pub dwell: Duration,
    /// Ticks to wait after the last brightness change before saving it.
    pub save_debounce_ticks: u32,
    /// Auto-dim at this location, or never.
    pub auto_dim: Option<Location>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ControllerOptions {
    fn from(config: &Config) -> Self {
        Self {
            dwell: config.dwell,
            save_debounce_ticks: config.save_debounce_ticks,
            auto_dim: config.auto_dim.then_some(config.location),
        }
    }
}

pub struct Controller<W, N, C> {
    display: SegmentDisplay<W>,
    settings: Settings,
    store: SettingsStore,
    network: N,
    clock: C,
    state: MenuState,
    options: ControllerOptions,
    save_countdown: Option<u32>,
    last_minute: Option<u8>,
}

impl<W, N, C> Controller<W, N, C>
where
    W: SegmentWriter,
    N: Network,
    C: ZoneClock,
{
    /// `settings` should be what `store` loaded; the display should already be at their brightness.
    pub fn new(
        display: SegmentDisplay<W>,
        store: SettingsStore,
        settings: Settings,
        network: N,
        clock: C,
        options: ControllerOptions,
    ) -> Self {
        Self {
            display,
            settings,
            store,
            network,
            clock,
            state: MenuState::Clock,
            options,
            save_countdown: None,
            last_minute: None,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn state(&self) -> &MenuState {
        &self.state
    }

    #[must_use]
    pub const fn display(&self) -> &SegmentDisplay<W> {
        &self.display
    }

    /// Ticks left before a pending brightness change is saved.
    #[must_use]
    pub const fn save_countdown(&self) -> Option<u32> {
        self.save_countdown
    }

    /// Render, then handle events and ticks until `shutdown` is signaled. The display is
    /// cleared on the way out.
    pub async fn run(&mut self, events: &EventQueue, shutdown: &ShutdownSignal) {
        self.render().await;
        loop {
            let next_second = Timer::after(self.clock.until_next_second());
            match select3(events.receive(), shutdown.wait(), next_second).await {
                Either3::First(event) => self.handle_event(event).await,
                Either3::Second(()) => break,
                Either3::Third(()) => self.tick().await,
            }
        }
        info!("Shutting down");
        self.shutdown();
    }

    /// Apply one event to the menu, carry out its effect and show the resulting screen.
    pub async fn handle_event(&mut self, event: NavEvent) {
        let state = mem::take(&mut self.state);
        let (state, effect) = state.handle(event, &mut self.settings, &mut self.network);
        self.state = state;

        match effect {
            Effect::None => {}
            Effect::Brightness => {
                self.display.set_brightness(self.settings.brightness);
                if self.options.save_debounce_ticks == 0 {
                    self.persist();
                } else {
                    self.save_countdown = Some(self.options.save_debounce_ticks);
                }
            }
            Effect::Persist => {
                self.save_countdown = None;
                self.persist();
            }
            Effect::Announce(message) => {
                self.display.set_colon(false);
                self.display.display(message).await;
                pause(self.options.dwell).await;
            }
        }
        self.render().await;
    }

    /// Once-a-second work: refresh the clock face, auto-dim and the delayed brightness save.
    pub async fn tick(&mut self) {
        if self.state == MenuState::Clock {
            let reading = self.render_clock().await;
            self.auto_dim(reading);
        }

        if let Some(remaining) = self.save_countdown {
            let remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                self.save_countdown = None;
                self.persist();
            } else {
                self.save_countdown = Some(remaining);
            }
        }
    }

    /// Blank the display.
    pub fn shutdown(&mut self) {
        if let Err(err) = self.display.clear() {
            warn!("Could not clear the display: {err}");
        }
    }

    async fn render(&mut self) {
        match self.state.screen(&self.settings) {
            Screen::Clock => {
                self.render_clock().await;
            }
            Screen::Text(text) => {
                self.display.set_colon(false);
                self.display.display(&text).await;
            }
        }
    }

    async fn render_clock(&mut self) -> ClockReading {
        let reading = self.clock.local_time_or_default(&self.settings.timezone);
        let face = ClockFace::render(reading, &self.settings);
        self.display.set_colon(face.colon);
        self.display.display(&face.text).await;
        reading
    }

    fn auto_dim(&mut self, reading: ClockReading) {
        let Some(location) = self.options.auto_dim else {
            return;
        };
        if self.last_minute == Some(reading.minute) {
            return;
        }
        self.last_minute = Some(reading.minute);

        let dark = solar::is_dark(location, reading);
        let brightness = match self.settings.brightness {
            Brightness::MIN if !dark => Brightness::MAX,
            Brightness::MAX if dark => Brightness::MIN,
            _ => return,
        };
        info!("Auto-dim: brightness {}", brightness.level());
        self.settings.brightness = brightness;
        self.display.set_brightness(brightness);
    }

    fn persist(&self) {
        match self.store.save(&self.settings) {
            Ok(()) => info!("Settings saved to {}", self.store.path().display()),
            Err(err) => warn!("Error saving settings: {err}"),
        }
    }
}

async fn pause(duration: Duration) {
    if duration.as_ticks() > 0 {
        Timer::after(duration).await;
    }
}
