use derive_more::derive::{Display, Error};
use embedded_hal::i2c::ErrorKind;

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    // `#[error(not(source))]` tells `derive_more` that the field is a description rather than an
    // underlying `core::error::Error` that should be reported as the cause.
    #[display("I2C bus error: {_0:?}")]
    Bus(#[error(not(source))] ErrorKind),

    #[display("Cannot open I2C bus: {_0}")]
    BusOpen(#[error(not(source))] String),

    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    #[display("Settings file is malformed: {_0}")]
    SettingsFormat(serde_json::Error),

    #[display("Unknown timezone: {_0}")]
    UnknownTimezone(#[error(not(source))] String),

    #[display("Wi-Fi command failed: {_0}")]
    WifiCommand(#[error(not(source))] String),

    #[display("Network name does not fit in 32 bytes")]
    SsidTooLong,

    #[display("Password does not fit in 64 bytes")]
    PasswordTooLong,

    #[display("GPIO error: {_0}")]
    Gpio(#[error(not(source))] String),

    #[display("Invalid value {value:?} for {name}")]
    InvalidConfig { name: &'static str, value: String },

    #[display("Cannot install signal handler: {_0}")]
    SignalHandler(ctrlc::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SettingsFormat(err)
    }
}

impl From<ctrlc::Error> for Error {
    fn from(err: ctrlc::Error) -> Self {
        Self::SignalHandler(err)
    }
}
