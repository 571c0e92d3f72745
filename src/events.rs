//! Navigation events and the queue that carries them to the control loop.

use core::time::Duration;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use embassy_sync::signal::Signal;
use log::debug;

/// How many events can wait while the control loop is busy scrolling or connecting.
pub const EVENT_QUEUE_CAPACITY: usize = 64;

/// How long a producer waits before retrying a full queue.
const FULL_QUEUE_RETRY: Duration = Duration::from_millis(5);

/// One discrete user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavEvent {
    Up,
    Down,
    Left,
    Right,
    Confirm,
}

/// FIFO of events from every producer to the single consumer.
pub type EventQueue = Channel<CriticalSectionRawMutex, NavEvent, EVENT_QUEUE_CAPACITY>;

/// Raised once when the process should stop.
pub type ShutdownSignal = Signal<CriticalSectionRawMutex, ()>;

/// The queue shared by the input threads and the control loop.
pub static EVENTS: EventQueue = Channel::new();

/// Set by the interrupt handler.
pub static SHUTDOWN: ShutdownSignal = Signal::new();

/// Producer handle for an [`EventQueue`], usable from ordinary threads.
#[derive(Clone, Copy)]
pub struct EventSender<'a>(&'a EventQueue);

impl<'a> EventSender<'a> {
    #[must_use]
    pub const fn new(queue: &'a EventQueue) -> Self {
        Self(queue)
    }

    /// Enqueue `event`, waiting for room if the queue is full. Events are never dropped.
    pub fn send_blocking(&self, mut event: NavEvent) {
        debug!("event {event:?}");
        loop {
            match self.0.try_send(event) {
                Ok(()) => return,
                Err(TrySendError::Full(returned)) => {
                    event = returned;
                    std::thread::sleep(FULL_QUEUE_RETRY);
                }
            }
        }
    }
}
