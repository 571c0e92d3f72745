//! Wi-Fi scanning and joining, and the device's own address.
//!
//! [`NmcliNetwork`] drives NetworkManager's `nmcli` and reads addresses with `ip addr`.
//! The parsing helpers are public so the output formats can be checked without a radio.

use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use std::process::{Command, Output};

use log::{info, warn};

use crate::{Error, Result};

/// Wi-Fi network credentials (SSID and password).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    /// Network SSID (up to 32 bytes).
    pub ssid: heapless::String<32>,
    /// Network password (up to 64 bytes).
    pub password: heapless::String<64>,
}

impl WifiCredentials {
    /// # Errors
    ///
    /// Returns an error if either value is too long for WPA.
    pub fn new(ssid: &str, password: &str) -> Result<Self> {
        Ok(Self {
            ssid: ssid.try_into().map_err(|()| Error::SsidTooLong)?,
            password: password.try_into().map_err(|()| Error::PasswordTooLong)?,
        })
    }
}

/// What the menu needs from the network stack.
pub trait Network {
    /// Names of the visible networks, deduplicated and sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan could not be run.
    fn scan(&mut self) -> Result<BTreeSet<String>>;

    /// Save a connection profile for `credentials` and bring it up.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be created or activated.
    fn connect(&mut self, credentials: &WifiCredentials) -> Result<()>;

    /// First IPv4 address of the wireless interface, if it has one.
    fn primary_address(&mut self) -> Option<Ipv4Addr>;
}

/// [`Network`] backed by NetworkManager.
#[derive(Debug, Clone)]
pub struct NmcliNetwork {
    interface: String,
}

impl NmcliNetwork {
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
        }
    }
}

impl Network for NmcliNetwork {
    fn scan(&mut self) -> Result<BTreeSet<String>> {
        let output = run("nmcli", &["-t", "-f", "SSID", "device", "wifi", "list"])?;
        let networks = parse_ssid_list(&String::from_utf8_lossy(&output.stdout));
        info!("Found {} Wi-Fi networks", networks.len());
        Ok(networks)
    }

    fn connect(&mut self, credentials: &WifiCredentials) -> Result<()> {
        let ssid = credentials.ssid.as_str();
        run(
            "nmcli",
            &[
                "connection",
                "add",
                "type",
                "wifi",
                "ifname",
                &self.interface,
                "con-name",
                ssid,
                "ssid",
                ssid,
                "--",
                "wifi-sec.key-mgmt",
                "wpa-psk",
                "wifi-sec.psk",
                credentials.password.as_str(),
            ],
        )?;
        run("nmcli", &["connection", "up", ssid])?;
        info!("Connected to {ssid}");
        Ok(())
    }

    fn primary_address(&mut self) -> Option<Ipv4Addr> {
        match run("ip", &["addr", "show", &self.interface]) {
            Ok(output) => parse_inet(&String::from_utf8_lossy(&output.stdout)),
            Err(err) => {
                warn!("{err}");
                None
            }
        }
    }
}

/// Run a command to completion, treating a non-zero exit as an error.
fn run(program: &str, args: &[&str]) -> Result<Output> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|err| Error::WifiCommand(format!("{program}: {err}")))?;
    if output.status.success() {
        Ok(output)
    } else {
        Err(Error::WifiCommand(format!(
            "{program} {}: {}",
            args.first().copied().unwrap_or_default(),
            String::from_utf8_lossy(&output.stderr).trim()
        )))
    }
}

/// SSIDs from `nmcli -t -f SSID device wifi list`, one per line.
///
/// Hidden networks (empty lines) are skipped and terse-mode escapes are undone.
#[must_use]
pub fn parse_ssid_list(stdout: &str) -> BTreeSet<String> {
    stdout
        .lines()
        .map(unescape_terse)
        .filter(|ssid| !ssid.is_empty())
        .collect()
}

/// The first `inet a.b.c.d` address in `ip addr show` output.
#[must_use]
pub fn parse_inet(stdout: &str) -> Option<Ipv4Addr> {
    stdout.lines().find_map(|line| {
        let mut words = line.split_whitespace();
        if words.next() != Some("inet") {
            return None;
        }
        let address = words.next()?;
        address.split('/').next()?.parse().ok()
    })
}

// nmcli terse output escapes ':' and '\' with a backslash.
fn unescape_terse(line: &str) -> String {
    let mut unescaped = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                unescaped.push(escaped);
                continue;
            }
        }
        unescaped.push(ch);
    }
    unescaped
}
