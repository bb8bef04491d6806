//! Interactive console: the `led_demo` command loop.
//!
//! Reads one byte at a time, decodes it into a [`DemoCommand`] and
//! dispatches it.  Static colours return straight to the prompt; the three
//! animated modes only return when the [`StopToken`] is tripped, which
//! also ends the console.
//!
//! ```text
//!  stdin ──▶ DemoCommand ──▶ StatusLed / free_run / pulse / soft_fade
//! ```

use std::io::Read;

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::DemoConfig;
use crate::drivers::free_run::free_run;
use crate::drivers::pulse::pulse;
use crate::drivers::run_control::StopToken;
use crate::drivers::soft_fade::soft_fade;
use crate::drivers::status_led::StatusLed;
use crate::error::Result;

use super::commands::DemoCommand;
use super::events::DemoEvent;
use super::ports::{EventSink, GpioPort};

/// The interactive demo.  Owns the LED for its whole lifetime.
pub struct Console<G> {
    led: StatusLed<G>,
    config: DemoConfig,
}

impl<G: GpioPort> Console<G> {
    pub fn new(gpio: G, config: DemoConfig) -> Self {
        Self {
            led: StatusLed::new(gpio, config.pins),
            config,
        }
    }

    /// Run until `X`, end of input, or `stop`.
    pub fn run(
        &mut self,
        input: impl Read,
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
        stop: &StopToken,
    ) -> Result<()> {
        for key in input.bytes() {
            let command = DemoCommand::from_key(key?);
            debug!("console: {:?}", command);
            if command == DemoCommand::Exit {
                break;
            }
            self.dispatch(command, sink, delay, stop)?;
            if stop.is_stopped() {
                info!("console: stop requested");
                break;
            }
        }
        sink.emit(&DemoEvent::Exiting);
        Ok(())
    }

    fn dispatch(
        &mut self,
        command: DemoCommand,
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
        stop: &StopToken,
    ) -> Result<()> {
        match command {
            DemoCommand::SetColour(colour) => self.led.set_colour(colour, sink),
            DemoCommand::FreeRun => {
                free_run(&mut self.led, sink, delay, stop, self.config.free_run_step_ms);
            }
            DemoCommand::Pulse => pulse(&mut self.led, sink, delay, stop, self.config.pulse)?,
            DemoCommand::SoftFade => {
                soft_fade(&mut self.led, sink, delay, stop, self.config.soft_fade)?;
            }
            DemoCommand::Exit | DemoCommand::Skip => {}
        }
        Ok(())
    }
}
