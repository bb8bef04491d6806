//! Free-run mode: step through [`COLOUR_SEQUENCE`] forever.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::app::events::DemoEvent;
use crate::app::ports::{EventSink, GpioPort};
use crate::colour::COLOUR_SEQUENCE;

use super::run_control::StopToken;
use super::status_led::StatusLed;

/// Show each sequence colour for `step_ms`, wrapping at the end.
///
/// Returns only once `stop` is tripped.
pub fn free_run<G: GpioPort>(
    led: &mut StatusLed<G>,
    sink: &mut impl EventSink,
    delay: &mut impl DelayNs,
    stop: &StopToken,
    step_ms: u32,
) {
    sink.emit(&DemoEvent::FreeRunStarted);
    info!(
        "free_run: {} colours, {} ms each",
        COLOUR_SEQUENCE.len(),
        step_ms
    );

    for &colour in COLOUR_SEQUENCE.iter().cycle() {
        led.set_colour(colour, sink);
        delay.delay_ms(step_ms);
        if stop.is_stopped() {
            break;
        }
    }

    info!("free_run: stopped on {:?}", led.current_colour());
}
