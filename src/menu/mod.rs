//! State machine for the clock face and its settings menu.
//!
//! Exactly one [`MenuState`] is active at a time. [`MenuState::handle`] consumes one event,
//! mutates the settings it owns and returns the next state together with an [`Effect`] for
//! the controller to carry out. The display itself is never touched here; the controller
//! asks [`MenuState::screen`] what to show after every transition.

pub mod password;
pub mod timezone;

use std::net::Ipv4Addr;

use log::{info, warn};

use crate::events::NavEvent;
use crate::network::{Network, WifiCredentials};
use crate::settings::Settings;
pub use password::{MAX_PASSWORD_LEN, PasswordEntry, SYMBOLS, Symbol};
pub use timezone::{UTC_INDEX, ZONES, Zone};

/// Address shown when the wireless interface has none.
pub const FALLBACK_ADDRESS: Ipv4Addr = Ipv4Addr::LOCALHOST;

pub const ANNOUNCE_ENTER_PASSWORD: &str = "ENTER PASSWORD";
pub const ANNOUNCE_NO_WIFI: &str = "NO WIFI";
pub const ANNOUNCE_GOOD: &str = "GOOD";
pub const ANNOUNCE_FAIL: &str = "FAIL";

/// Top-level menu entries, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuItem {
    #[default]
    Flash,
    HourFormat,
    Zone,
    Wifi,
    Ip,
}

impl MenuItem {
    pub const ALL: [Self; 5] = [
        Self::Flash,
        Self::HourFormat,
        Self::Zone,
        Self::Wifi,
        Self::Ip,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flash => "FLASH",
            Self::HourFormat => "24H",
            Self::Zone => "ZONE",
            Self::Wifi => "WIFI",
            Self::Ip => "IP",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Flash => Self::HourFormat,
            Self::HourFormat => Self::Zone,
            Self::Zone => Self::Wifi,
            Self::Wifi => Self::Ip,
            Self::Ip => Self::Flash,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Flash => Self::Ip,
            Self::HourFormat => Self::Flash,
            Self::Zone => Self::HourFormat,
            Self::Wifi => Self::Zone,
            Self::Ip => Self::Wifi,
        }
    }
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Brightness changed: apply it now and save it once adjustments settle.
    Brightness,
    /// Save the settings now.
    Persist,
    /// Show a message for a moment before the next screen.
    Announce(&'static str),
}

/// What the display should show for a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The time of day, refreshed every tick.
    Clock,
    /// Fixed text, shown with the colon off.
    Text(String),
}

/// Every screen the clock can be on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Clock,
    MenuList(MenuItem),
    FlashSetting,
    HourFormatSetting,
    TimezoneSetting(usize),
    WifiScan {
        networks: Vec<String>,
        index: usize,
    },
    WifiPasswordEntry {
        ssid: String,
        entry: PasswordEntry,
    },
    IpDisplay {
        octets: [u8; 4],
        index: usize,
    },
}

impl MenuState {
    /// Apply one event.
    pub fn handle<N: Network>(
        self,
        event: NavEvent,
        settings: &mut Settings,
        network: &mut N,
    ) -> (Self, Effect) {
        match self {
            Self::Clock => Self::handle_clock(event, settings),
            Self::MenuList(item) => Self::handle_menu_list(item, event, settings, network),
            Self::FlashSetting => {
                if event == NavEvent::Confirm {
                    return (Self::Clock, Effect::Persist);
                }
                settings.flash_colon = !settings.flash_colon;
                (Self::FlashSetting, Effect::None)
            }
            Self::HourFormatSetting => {
                if event == NavEvent::Confirm {
                    return (Self::Clock, Effect::Persist);
                }
                settings.hour_24 = !settings.hour_24;
                (Self::HourFormatSetting, Effect::None)
            }
            Self::TimezoneSetting(index) => Self::handle_timezone(index, event, settings),
            Self::WifiScan { networks, index } => Self::handle_wifi_scan(networks, index, event),
            Self::WifiPasswordEntry { ssid, entry } => {
                Self::handle_password(ssid, entry, event, network)
            }
            Self::IpDisplay { octets, index } => {
                let index = match event {
                    NavEvent::Up | NavEvent::Right => index.saturating_add(1).min(octets.len().saturating_sub(1)),
                    NavEvent::Down | NavEvent::Left => index.saturating_sub(1),
                    NavEvent::Confirm => return (Self::Clock, Effect::None),
                };
                (Self::IpDisplay { octets, index }, Effect::None)
            }
        }
    }

    /// The screen for this state under `settings`.
    #[must_use]
    pub fn screen(&self, settings: &Settings) -> Screen {
        let text = match self {
            Self::Clock => return Screen::Clock,
            Self::MenuList(item) => item.label().to_owned(),
            Self::FlashSetting => {
                format!("FLASH  {}", if settings.flash_colon { "On" } else { "Off" })
            }
            Self::HourFormatSetting => if settings.hour_24 { "24" } else { "12" }.to_owned(),
            Self::TimezoneSetting(index) => timezone::zone(*index).label.to_owned(),
            Self::WifiScan { networks, index } => {
                networks.get(*index).cloned().unwrap_or_default()
            }
            Self::WifiPasswordEntry { entry, .. } => {
                if entry.is_committed() {
                    entry.password().as_str().to_owned()
                } else {
                    entry.current().label.to_owned()
                }
            }
            Self::IpDisplay { octets, index } => octets
                .get(*index)
                .map(ToString::to_string)
                .unwrap_or_default(),
        };
        Screen::Text(text)
    }

    fn handle_clock(event: NavEvent, settings: &mut Settings) -> (Self, Effect) {
        settings.brightness = match event {
            NavEvent::Up => settings.brightness.brighter(),
            NavEvent::Down => settings.brightness.dimmer(),
            NavEvent::Confirm => settings.brightness.toggled(),
            NavEvent::Left | NavEvent::Right => {
                return (Self::MenuList(MenuItem::default()), Effect::None);
            }
        };
        (Self::Clock, Effect::Brightness)
    }

    fn handle_menu_list<N: Network>(
        item: MenuItem,
        event: NavEvent,
        settings: &mut Settings,
        network: &mut N,
    ) -> (Self, Effect) {
        match event {
            NavEvent::Up | NavEvent::Right => (Self::MenuList(item.next()), Effect::None),
            NavEvent::Down | NavEvent::Left => (Self::MenuList(item.previous()), Effect::None),
            NavEvent::Confirm => Self::enter(item, settings, network),
        }
    }

    fn enter<N: Network>(item: MenuItem, settings: &mut Settings, network: &mut N) -> (Self, Effect) {
        match item {
            MenuItem::Flash => (Self::FlashSetting, Effect::None),
            MenuItem::HourFormat => (Self::HourFormatSetting, Effect::None),
            MenuItem::Zone => {
                let index = timezone::position(&settings.timezone).unwrap_or_else(|| {
                    info!("{} is not in the zone list; selecting UTC", settings.timezone);
                    settings.timezone = timezone::zone(UTC_INDEX).id.to_owned();
                    UTC_INDEX
                });
                (Self::TimezoneSetting(index), Effect::None)
            }
            MenuItem::Wifi => match network.scan() {
                Ok(networks) if !networks.is_empty() => (
                    Self::WifiScan {
                        networks: networks.into_iter().collect(),
                        index: 0,
                    },
                    Effect::None,
                ),
                Ok(_) => (Self::Clock, Effect::Announce(ANNOUNCE_NO_WIFI)),
                Err(err) => {
                    warn!("Wi-Fi scan failed: {err}");
                    (Self::Clock, Effect::Announce(ANNOUNCE_NO_WIFI))
                }
            },
            MenuItem::Ip => {
                let address = network.primary_address().unwrap_or(FALLBACK_ADDRESS);
                (
                    Self::IpDisplay {
                        octets: address.octets(),
                        index: 0,
                    },
                    Effect::None,
                )
            }
        }
    }

    fn handle_timezone(index: usize, event: NavEvent, settings: &mut Settings) -> (Self, Effect) {
        let index = match event {
            NavEvent::Up | NavEvent::Right => cycle_next(index, ZONES.len()),
            NavEvent::Down | NavEvent::Left => cycle_previous(index, ZONES.len()),
            NavEvent::Confirm => return (Self::Clock, Effect::Persist),
        };
        settings.timezone = timezone::zone(index).id.to_owned();
        (Self::TimezoneSetting(index), Effect::None)
    }

    fn handle_wifi_scan(networks: Vec<String>, index: usize, event: NavEvent) -> (Self, Effect) {
        let index = match event {
            NavEvent::Up | NavEvent::Right => cycle_next(index, networks.len()),
            NavEvent::Down | NavEvent::Left => cycle_previous(index, networks.len()),
            NavEvent::Confirm => {
                let ssid = networks.into_iter().nth(index).unwrap_or_default();
                return (
                    Self::WifiPasswordEntry {
                        ssid,
                        entry: PasswordEntry::new(),
                    },
                    Effect::Announce(ANNOUNCE_ENTER_PASSWORD),
                );
            }
        };
        (Self::WifiScan { networks, index }, Effect::None)
    }

    fn handle_password<N: Network>(
        ssid: String,
        mut entry: PasswordEntry,
        event: NavEvent,
        network: &mut N,
    ) -> (Self, Effect) {
        match event {
            NavEvent::Up => entry.next_symbol(),
            NavEvent::Down => entry.previous_symbol(),
            NavEvent::Right => entry.move_right(),
            NavEvent::Left => entry.move_left(),
            NavEvent::Confirm if !entry.is_committed() => entry.commit(),
            NavEvent::Confirm => {
                let outcome = WifiCredentials::new(&ssid, entry.password().as_str())
                    .and_then(|credentials| network.connect(&credentials));
                let announcement = match outcome {
                    Ok(()) => ANNOUNCE_GOOD,
                    Err(err) => {
                        warn!("Could not join {ssid}: {err}");
                        ANNOUNCE_FAIL
                    }
                };
                return (Self::Clock, Effect::Announce(announcement));
            }
        }
        (Self::WifiPasswordEntry { ssid, entry }, Effect::None)
    }
}

/// `index + 1`, wrapping to 0 at `len`.
pub(crate) const fn cycle_next(index: usize, len: usize) -> usize {
    let next = index.saturating_add(1);
    if next >= len { 0 } else { next }
}

/// `index - 1`, wrapping to `len - 1` below 0.
pub(crate) const fn cycle_previous(index: usize, len: usize) -> usize {
    match index.checked_sub(1) {
        Some(previous) if previous < len => previous,
        _ => len.saturating_sub(1),
    }
}
