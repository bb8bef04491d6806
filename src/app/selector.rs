//! One-shot LED selector: the `led_select` logic.
//!
//! Lights exactly the named channel and switches the other two off.  A
//! missing or unknown name switches everything off; neither is an error.

use log::warn;

use crate::colour::{Channel, Colour};
use crate::drivers::status_led::StatusLed;

use super::events::DemoEvent;
use super::ports::{EventSink, GpioPort};

/// Resolve a command-line colour name (exact, case-sensitive).
pub fn resolve(arg: Option<&str>) -> Option<Channel> {
    arg.and_then(Channel::from_name)
}

/// Apply the selection for `arg` and return the channel left on, if any.
pub fn select<G: GpioPort>(
    led: &mut StatusLed<G>,
    arg: Option<&str>,
    sink: &mut impl EventSink,
) -> Option<Channel> {
    let selected = resolve(arg);
    match (arg, selected) {
        (None, _) => sink.emit(&DemoEvent::SelectUsage),
        (Some(_), Some(channel)) => sink.emit(&DemoEvent::Selected(channel)),
        (Some(name), None) => warn!("led_select: unknown colour {:?}, all LEDs off", name),
    }

    led.show(selected.map_or(Colour::Off, Colour::from));
    selected
}
