//! Port traits: the boundary between demo logic and the outside world.
//!
//! ```text
//!   Driver ──▶ GpioPort ──▶ Adapter (rppal / sim / mock)
//!   Driver ──▶ EventSink ──▶ Adapter (stdout / recorder)
//! ```
//!
//! Drivers consume these via generics, so the demo logic never touches
//! hardware directly and runs unchanged against a recording double.

use embedded_hal::digital::PinState;

use crate::error::Result;

use super::events::DemoEvent;

/// Electrical role of a GPIO line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// Plain push-pull digital output.
    Output,
    /// Routed to the SoC's PWM peripheral.
    HardwarePwm,
}

// ───────────────────────────────────────────────────────────────
// GPIO port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// The GPIO primitives the demos need, and nothing more.
///
/// Setup is not part of the trait: an adapter is only constructed once the
/// peripheral is open and numbering is established.
pub trait GpioPort {
    /// Reconfigure `pin`.
    fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<()>;

    /// Drive a digital output.
    fn digital_write(&mut self, pin: u8, state: PinState);

    /// Set hardware PWM duty, `0..=1024`.  Larger values are clamped.
    fn pwm_write(&mut self, pin: u8, duty: u16);

    /// Start software PWM emulation on `pin` with duty range `0..=range`.
    fn soft_pwm_create(&mut self, pin: u8, initial: u32, range: u32) -> Result<()>;

    /// Update the duty of a software PWM line created earlier.
    fn soft_pwm_write(&mut self, pin: u8, duty: u32);
}

impl<T: GpioPort + ?Sized> GpioPort for &mut T {
    fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<()> {
        (**self).set_mode(pin, mode)
    }

    fn digital_write(&mut self, pin: u8, state: PinState) {
        (**self).digital_write(pin, state);
    }

    fn pwm_write(&mut self, pin: u8, duty: u16) {
        (**self).pwm_write(pin, duty);
    }

    fn soft_pwm_create(&mut self, pin: u8, initial: u32, range: u32) -> Result<()> {
        (**self).soft_pwm_create(pin, initial, range)
    }

    fn soft_pwm_write(&mut self, pin: u8, duty: u32) {
        (**self).soft_pwm_write(pin, duty);
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → console)
// ───────────────────────────────────────────────────────────────

/// The demos emit human-readable [`DemoEvent`]s through this port.
/// Adapters decide where they go (stdout, a test recorder, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &DemoEvent);
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: &DemoEvent) {
        (**self).emit(event);
    }
}
