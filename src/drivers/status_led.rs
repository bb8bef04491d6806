//! RGB status LED driver.
//!
//! Three GPIO lines drive the discrete R/G/B dies of a common-cathode
//! RGB LED.  A colour is shown by switching each line to match its bit
//! in the [`Colour`] mask.
//!
//! ## Dual-target design
//!
//! Generic over [`GpioPort`]: rppal on a Pi, the in-memory simulator on
//! the host, a recording double in tests.

use embedded_hal::digital::PinState;
use log::trace;

use crate::app::events::DemoEvent;
use crate::app::ports::{EventSink, GpioPort};
use crate::colour::{Channel, Colour};
use crate::config::PinBinding;

pub struct StatusLed<G> {
    gpio: G,
    pins: PinBinding,
    current: Colour,
}

impl<G: GpioPort> StatusLed<G> {
    /// Wrap an already set-up GPIO adapter.  The LED state is assumed off.
    pub fn new(gpio: G, pins: PinBinding) -> Self {
        Self {
            gpio,
            pins,
            current: Colour::Off,
        }
    }

    /// Show `colour`, announcing each channel write on `sink` first.
    pub fn set_colour(&mut self, colour: Colour, sink: &mut impl EventSink) {
        for channel in Channel::ALL {
            let on = colour.has_channel(channel);
            sink.emit(&DemoEvent::ChannelSwitched { channel, on });
            self.write_channel(channel, on);
        }
        self.current = colour;
    }

    /// Show `colour` without announcing it.
    pub fn show(&mut self, colour: Colour) {
        for channel in Channel::ALL {
            self.write_channel(channel, colour.has_channel(channel));
        }
        self.current = colour;
    }

    pub fn off(&mut self, sink: &mut impl EventSink) {
        self.set_colour(Colour::Off, sink);
    }

    /// Last colour written through this driver.
    pub fn current_colour(&self) -> Colour {
        self.current
    }

    pub fn pins(&self) -> PinBinding {
        self.pins
    }

    /// Direct access for the PWM drivers, which bypass the on/off model.
    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }

    fn write_channel(&mut self, channel: Channel, on: bool) {
        let pin = self.pins.pin(channel);
        trace!("status_led: {} (GPIO {}) -> {}", channel, pin, on);
        self.gpio.digital_write(pin, PinState::from(on));
    }
}
