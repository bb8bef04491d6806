//! Hardware PWM pulse on the green channel.
//!
//! Only green sits on a PWM-capable pin.  Brightness ramps up and back down
//! along an exponential duty curve, which the eye perceives as a roughly
//! linear change in brightness.
//!
//! ## Duty curve
//!
//! With `r = steps · log10(2) / log10(1024)`, step `i` maps to
//! `round(2^(i / r)) − 1`.  Step 0 gives 0 and step `steps` gives 1023,
//! just inside the 0–1024 hardware range.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::app::events::DemoEvent;
use crate::app::ports::{EventSink, GpioPort, PinMode};
use crate::colour::Colour;
use crate::config::FadeTiming;
use crate::error::Result;
use crate::pins::HW_PWM_RANGE;

use super::run_control::StopToken;
use super::status_led::StatusLed;

/// Perceptual brightness curve over `steps` duty steps.
#[derive(Debug, Clone, Copy)]
pub struct PulseCurve {
    steps: u32,
    exponent_scale: f64,
}

impl PulseCurve {
    pub fn new(steps: u32) -> Self {
        let exponent_scale =
            f64::from(steps.max(1)) * 2f64.log10() / f64::from(HW_PWM_RANGE).log10();
        Self {
            steps,
            exponent_scale,
        }
    }

    /// Hardware duty for step `i`, clamped to `0..=1024`.
    pub fn duty(&self, i: u32) -> u16 {
        let raw = 2f64.powf(f64::from(i) / self.exponent_scale).round() - 1.0;
        raw.clamp(0.0, f64::from(HW_PWM_RANGE)) as u16
    }

    /// Steps of one full pulse: `0 .. steps` up, then `steps ..= 1` down.
    pub fn cycle(&self) -> impl Iterator<Item = u32> {
        let steps = self.steps;
        (0..steps).chain((1..=steps).rev())
    }
}

/// Pulse the green LED forever.
///
/// All channels are switched off first, then the green pin is handed to the
/// PWM peripheral.  When `stop` is tripped the pin is returned to a plain
/// output before returning.
pub fn pulse<G: GpioPort>(
    led: &mut StatusLed<G>,
    sink: &mut impl EventSink,
    delay: &mut impl DelayNs,
    stop: &StopToken,
    timing: FadeTiming,
) -> Result<()> {
    sink.emit(&DemoEvent::PulseStarted);
    led.off(sink);

    let pin = led.pins().green;
    led.gpio_mut().set_mode(pin, PinMode::HardwarePwm)?;

    let curve = PulseCurve::new(timing.steps);
    let interval_us = timing.step_interval_us();
    info!(
        "pulse: GPIO {} at {} Hz, {} steps, {} us/step",
        pin, timing.freq_hz, timing.steps, interval_us
    );

    loop {
        for i in curve.cycle() {
            led.gpio_mut().pwm_write(pin, curve.duty(i));
            delay.delay_us(interval_us);
            if stop.is_stopped() {
                info!("pulse: stopped");
                led.gpio_mut().set_mode(pin, PinMode::Output)?;
                led.show(Colour::Off);
                return Ok(());
            }
        }
    }
}
