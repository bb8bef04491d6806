//! GPIO / peripheral pin assignments for the RGB LED board.
//!
//! Single source of truth; every driver references this module (via
//! [`PinBinding`](crate::config::PinBinding)) rather than hard-coding pin
//! numbers.
//!
//! Numbers are BCM.  The LED is wired to physical header pins 11, 12 and 13
//! (wiringPi 0, 1 and 2).

// ---------------------------------------------------------------------------
// RGB LED (three discrete lines, common cathode)
// ---------------------------------------------------------------------------

/// Physical pin 11.
pub const LED_R_GPIO: u8 = 17;
/// Physical pin 12.  Doubles as PWM0, the only hardware PWM line on the header
/// used by this board.
pub const LED_G_GPIO: u8 = 18;
/// Physical pin 13.
pub const LED_B_GPIO: u8 = 27;

// ---------------------------------------------------------------------------
// Hardware PWM
// ---------------------------------------------------------------------------

/// Upper bound of a hardware PWM duty value (0 = off, 1024 = full).
pub const HW_PWM_RANGE: u16 = 1024;
/// Carrier frequency for the hardware PWM channel.
pub const HW_PWM_FREQ_HZ: f64 = 1_000.0;

/// Map a BCM pin to its hardware PWM channel index, if it has one.
pub const fn hw_pwm_channel(pin: u8) -> Option<u8> {
    match pin {
        12 | 18 => Some(0),
        13 | 19 => Some(1),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Software PWM
// ---------------------------------------------------------------------------

/// Width of one software PWM range unit.  A range of 100 gives a 10 ms
/// period (100 Hz).
pub const SOFT_PWM_PULSE_US: u32 = 100;

/// Carrier frequency for a software PWM line with the given range.
pub fn soft_pwm_freq_hz(range: u32) -> f64 {
    1_000_000.0 / (f64::from(SOFT_PWM_PULSE_US) * f64::from(range.max(1)))
}

// ---------------------------------------------------------------------------
// Duty conversion
// ---------------------------------------------------------------------------

/// Fraction of `range` that `duty` represents, clamped to `0.0..=1.0`.
pub fn duty_ratio(duty: u32, range: u32) -> f64 {
    f64::from(duty.min(range)) / f64::from(range.max(1))
}
