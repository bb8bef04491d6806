//! Outbound status events.
//!
//! Drivers and the command loops emit these through the
//! [`EventSink`](super::ports::EventSink) port.  `Display` gives the exact
//! console line shown to the user.

use core::fmt;

use crate::colour::Channel;

/// Structured events emitted by the demos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoEvent {
    /// The interactive menu, printed once at start-up.
    Menu,

    /// A channel is about to be switched on or off.
    ChannelSwitched { channel: Channel, on: bool },

    /// Free-run sequence started.
    FreeRunStarted,

    /// Hardware PWM pulse started.
    PulseStarted,

    /// Software PWM cross-fade started.
    SoftFadeStarted,

    /// The interactive loop is ending.
    Exiting,

    /// `led_select` lit a single LED.
    Selected(Channel),

    /// `led_select` was run without an argument.
    SelectUsage,
}

impl fmt::Display for DemoEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Menu => f.write_str(MENU),
            Self::ChannelSwitched { channel, on } => {
                write!(f, "Turning {} {}", channel, if *on { "on" } else { "off" })
            }
            Self::FreeRunStarted => f.write_str("Free running! Use CTRL+C to exit."),
            Self::PulseStarted => f.write_str("Green LED pulse! Use CTRL+C to exit."),
            Self::SoftFadeStarted => {
                f.write_str("Free running with software PWM. Use CTRL+C to exit.")
            }
            Self::Exiting => f.write_str("Exiting."),
            Self::Selected(channel) => write!(f, "Turning the {} LED on.", channel.name()),
            Self::SelectUsage => f.write_str("Usage: led_select <colour> {red|green|blue}"),
        }
    }
}

const MENU: &str = "\
Enter a letter from the following:
* R (Red)
* G (Green)
* B (Blue)
* C (Cyan)
* M (Magenta)
* Y (Yellow)
* W (White)
* F  Free run - changes colour forever.
* P  Pulse - pulses the green LED forever (hardware PWM).
* S  Software PWM pulse - changes colour forever with software PWM fades.
* X  Exit";
