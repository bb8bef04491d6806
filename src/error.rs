//! Unified error types for the RGB LED demos.
//!
//! A single `Error` enum that every adapter and driver can convert into,
//! keeping the binaries' error handling uniform.  Digital and PWM writes
//! are infallible at the port boundary; only setup, pin-mode changes and
//! software-PWM registration can fail.

use core::fmt;

/// Every fallible operation in the library funnels into this type.
#[derive(Debug)]
pub enum Error {
    /// The GPIO peripheral could not be opened.
    Init(String),
    /// A pin could not be acquired or reconfigured.
    Pin { pin: u8, reason: String },
    /// The pin is not routed to a hardware PWM channel.
    NoHardwarePwm(u8),
    /// Software PWM emulation could not be started on a pin.
    SoftPwm { pin: u8, reason: String },
    /// Reading interactive input failed.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "GPIO init: {msg}"),
            Self::Pin { pin, reason } => write!(f, "GPIO {pin}: {reason}"),
            Self::NoHardwarePwm(pin) => write!(f, "GPIO {pin} has no hardware PWM channel"),
            Self::SoftPwm { pin, reason } => write!(f, "GPIO {pin} software PWM: {reason}"),
            Self::Io(e) => write!(f, "input: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Library-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
