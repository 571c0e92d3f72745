//! Line-oriented keyboard input for machines without the encoder panel.
//!
//! Each line read from stdin is translated into zero or more events. An empty line is a
//! confirm press.

use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use log::{info, warn};

use crate::events::{EventSender, NavEvent};

const ESCAPE: char = '\u{1b}';

/// Translate one line of keyboard input (without its line terminator).
///
/// Recognizes the ANSI arrow sequences `ESC [ A/B/C/D`, `+` for up and `-` for down.
/// Anything else is ignored.
#[must_use]
pub fn parse_line(line: &str) -> Vec<NavEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return vec![NavEvent::Confirm];
    }

    let mut events = Vec::new();
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '+' => events.push(NavEvent::Up),
            '-' => events.push(NavEvent::Down),
            ESCAPE => {
                if chars.next() != Some('[') {
                    continue;
                }
                match chars.next() {
                    Some('A') => events.push(NavEvent::Up),
                    Some('B') => events.push(NavEvent::Down),
                    Some('C') => events.push(NavEvent::Right),
                    Some('D') => events.push(NavEvent::Left),
                    _ => {}
                }
            }
            _ => {}
        }
    }
    events
}

/// Read stdin on a background thread until end of input.
///
/// # Errors
///
/// Returns an error if the thread cannot be started.
pub fn spawn(sender: EventSender<'static>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("keyboard".to_owned())
        .spawn(move || {
            info!("Keyboard input ready: arrows, +, -, Enter");
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => parse_line(&line)
                        .into_iter()
                        .for_each(|event| sender.send_blocking(event)),
                    Err(err) => {
                        warn!("Keyboard input stopped: {err}");
                        return;
                    }
                }
            }
            info!("Keyboard input closed");
        })
}
