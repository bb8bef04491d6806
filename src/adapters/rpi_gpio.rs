//! Raspberry Pi GPIO adapter (rppal).
//!
//! Owns the `/dev/gpiomem` handle plus every pin the demos have claimed.
//! Digital outputs are `OutputPin`s, hardware PWM goes through the sysfs
//! PWM channel that the pin is routed to, and software PWM uses rppal's
//! per-pin background thread.
//!
//! Claimed outputs are not reset when dropped, so the last written levels
//! stay on the header after the process exits.

use std::collections::HashMap;

use embedded_hal::digital::PinState;
use log::{info, warn};
use rppal::gpio::{Gpio, Level, OutputPin};
use rppal::pwm::{Channel as PwmChannel, Polarity, Pwm};

use crate::app::ports::{GpioPort, PinMode};
use crate::config::PinBinding;
use crate::error::{Error, Result};
use crate::pins;

pub struct RpiGpio {
    gpio: Gpio,
    outputs: HashMap<u8, OutputPin>,
    pwm: HashMap<u8, Pwm>,
    soft_ranges: HashMap<u8, u32>,
}

impl RpiGpio {
    /// Open the GPIO peripheral and configure the bound pins as low outputs.
    pub fn setup(binding: &PinBinding) -> Result<Self> {
        let gpio = Gpio::new().map_err(|e| Error::Init(e.to_string()))?;
        let mut this = Self {
            gpio,
            outputs: HashMap::new(),
            pwm: HashMap::new(),
            soft_ranges: HashMap::new(),
        };
        for pin in binding.all() {
            this.set_mode(pin, PinMode::Output)?;
        }
        info!("rpi_gpio: outputs configured on {:?}", binding.all());
        Ok(this)
    }

    fn claim_output(&mut self, pin: u8) -> Result<()> {
        if self.outputs.contains_key(&pin) {
            return Ok(());
        }
        let mut output = self
            .gpio
            .get(pin)
            .map_err(|e| Error::Pin {
                pin,
                reason: e.to_string(),
            })?
            .into_output_low();
        output.set_reset_on_drop(false);
        self.outputs.insert(pin, output);
        Ok(())
    }
}

fn level(state: PinState) -> Level {
    match state {
        PinState::High => Level::High,
        PinState::Low => Level::Low,
    }
}

impl GpioPort for RpiGpio {
    fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<()> {
        match mode {
            PinMode::Output => {
                // Dropping the Pwm disables the channel.
                self.pwm.remove(&pin);
                self.claim_output(pin)
            }
            PinMode::HardwarePwm => {
                let channel = match pins::hw_pwm_channel(pin) {
                    Some(0) => PwmChannel::Pwm0,
                    Some(_) => PwmChannel::Pwm1,
                    None => return Err(Error::NoHardwarePwm(pin)),
                };
                // Release the line so the PWM peripheral can take it over.
                self.outputs.remove(&pin);
                self.soft_ranges.remove(&pin);
                let pwm = Pwm::with_frequency(
                    channel,
                    pins::HW_PWM_FREQ_HZ,
                    0.0,
                    Polarity::Normal,
                    true,
                )
                .map_err(|e| Error::Pin {
                    pin,
                    reason: e.to_string(),
                })?;
                self.pwm.insert(pin, pwm);
                info!("rpi_gpio: GPIO {} on {:?}", pin, channel);
                Ok(())
            }
        }
    }

    fn digital_write(&mut self, pin: u8, state: PinState) {
        match self.outputs.get_mut(&pin) {
            Some(output) => output.write(level(state)),
            None => warn!("rpi_gpio: GPIO {} is not an output, write dropped", pin),
        }
    }

    fn pwm_write(&mut self, pin: u8, duty: u16) {
        let Some(pwm) = self.pwm.get(&pin) else {
            warn!("rpi_gpio: GPIO {} is not in PWM mode, duty dropped", pin);
            return;
        };
        let ratio = pins::duty_ratio(u32::from(duty), u32::from(pins::HW_PWM_RANGE));
        if let Err(e) = pwm.set_duty_cycle(ratio) {
            warn!("rpi_gpio: GPIO {} PWM duty {} failed: {}", pin, duty, e);
        }
    }

    fn soft_pwm_create(&mut self, pin: u8, initial: u32, range: u32) -> Result<()> {
        if range == 0 {
            return Err(Error::SoftPwm {
                pin,
                reason: "range must be non-zero".into(),
            });
        }
        self.set_mode(pin, PinMode::Output)?;
        let output = self.outputs.get_mut(&pin).ok_or_else(|| Error::SoftPwm {
            pin,
            reason: "pin not claimed".into(),
        })?;
        output
            .set_pwm_frequency(pins::soft_pwm_freq_hz(range), pins::duty_ratio(initial, range))
            .map_err(|e| Error::SoftPwm {
                pin,
                reason: e.to_string(),
            })?;
        self.soft_ranges.insert(pin, range);
        Ok(())
    }

    fn soft_pwm_write(&mut self, pin: u8, duty: u32) {
        let (Some(&range), Some(output)) = (self.soft_ranges.get(&pin), self.outputs.get_mut(&pin))
        else {
            warn!("rpi_gpio: GPIO {} has no software PWM, duty dropped", pin);
            return;
        };
        if let Err(e) = output.set_pwm_frequency(pins::soft_pwm_freq_hz(range), pins::duty_ratio(duty, range)) {
            warn!("rpi_gpio: GPIO {} soft PWM duty {} failed: {}", pin, duty, e);
        }
    }
}
