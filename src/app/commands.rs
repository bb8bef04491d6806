//! Inbound commands for the interactive console.
//!
//! Each keypress decodes to one [`DemoCommand`], case-insensitively.
//! Anything unrecognised is a request to switch the LED off.

use crate::colour::Colour;

/// Commands the operator can type into `led_demo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoCommand {
    /// Show a static colour (`R G B C M Y W`, or `Off` for any other key).
    SetColour(Colour),
    /// Cycle the colour sequence forever (`F`).
    FreeRun,
    /// Pulse green with hardware PWM forever (`P`).
    Pulse,
    /// Cross-fade the sequence with software PWM forever (`S`).
    SoftFade,
    /// Leave the console (`X`).
    Exit,
    /// Line terminator, nothing to do.
    Skip,
}

impl DemoCommand {
    /// Decode a single input byte.
    pub fn from_key(key: u8) -> Self {
        match key.to_ascii_uppercase() {
            b'R' => Self::SetColour(Colour::Red),
            b'G' => Self::SetColour(Colour::Green),
            b'B' => Self::SetColour(Colour::Blue),
            b'C' => Self::SetColour(Colour::Cyan),
            b'M' => Self::SetColour(Colour::Magenta),
            b'Y' => Self::SetColour(Colour::Yellow),
            b'W' => Self::SetColour(Colour::White),
            b'F' => Self::FreeRun,
            b'P' => Self::Pulse,
            b'S' => Self::SoftFade,
            b'X' => Self::Exit,
            b'\n' | b'\r' => Self::Skip,
            _ => Self::SetColour(Colour::Off),
        }
    }
}
