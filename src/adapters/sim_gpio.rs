//! Simulated GPIO adapter.
//!
//! Implements [`GpioPort`] entirely in memory so the demos run on a host
//! without GPIO hardware.  It enforces the same rules as the rppal adapter
//! (only PWM-capable pins accept hardware PWM, a software PWM range must be
//! non-zero) and exposes the resulting pin states for inspection.

use std::collections::HashMap;

use embedded_hal::digital::PinState;
use log::{info, trace, warn};

use crate::app::ports::{GpioPort, PinMode};
use crate::config::PinBinding;
use crate::error::{Error, Result};
use crate::pins;

/// Last known state of one simulated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimPin {
    pub mode: PinMode,
    pub level: PinState,
    pub pwm_duty: u16,
    /// `(duty, range)` while software PWM is running.
    pub soft_pwm: Option<(u32, u32)>,
}

impl SimPin {
    fn output() -> Self {
        Self {
            mode: PinMode::Output,
            level: PinState::Low,
            pwm_duty: 0,
            soft_pwm: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct SimGpio {
    pins: HashMap<u8, SimPin>,
}

impl SimGpio {
    /// Configure the bound pins as low outputs.
    pub fn setup(binding: &PinBinding) -> Self {
        let pins = binding.all().into_iter().map(|p| (p, SimPin::output())).collect();
        info!("sim_gpio: outputs configured on {:?}", binding.all());
        Self { pins }
    }

    /// Digital level of `pin`, if it is configured.
    pub fn level(&self, pin: u8) -> Option<PinState> {
        self.pins.get(&pin).map(|p| p.level)
    }

    pub fn mode(&self, pin: u8) -> Option<PinMode> {
        self.pins.get(&pin).map(|p| p.mode)
    }

    pub fn pwm_duty(&self, pin: u8) -> Option<u16> {
        self.pins.get(&pin).map(|p| p.pwm_duty)
    }

    pub fn soft_pwm(&self, pin: u8) -> Option<(u32, u32)> {
        self.pins.get(&pin).and_then(|p| p.soft_pwm)
    }
}

impl GpioPort for SimGpio {
    fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<()> {
        if mode == PinMode::HardwarePwm && pins::hw_pwm_channel(pin).is_none() {
            return Err(Error::NoHardwarePwm(pin));
        }
        let entry = self.pins.entry(pin).or_insert_with(SimPin::output);
        entry.mode = mode;
        entry.soft_pwm = None;
        entry.pwm_duty = 0;
        trace!("sim_gpio: GPIO {} mode {:?}", pin, mode);
        Ok(())
    }

    fn digital_write(&mut self, pin: u8, state: PinState) {
        match self.pins.get_mut(&pin) {
            Some(p) if p.mode == PinMode::Output => p.level = state,
            _ => warn!("sim_gpio: GPIO {} is not an output, write dropped", pin),
        }
    }

    fn pwm_write(&mut self, pin: u8, duty: u16) {
        match self.pins.get_mut(&pin) {
            Some(p) if p.mode == PinMode::HardwarePwm => p.pwm_duty = duty.min(pins::HW_PWM_RANGE),
            _ => warn!("sim_gpio: GPIO {} is not in PWM mode, duty dropped", pin),
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
        if let Some(p) = self.pins.get_mut(&pin) {
            p.soft_pwm = Some((initial.min(range), range));
        }
        Ok(())
    }

    fn soft_pwm_write(&mut self, pin: u8, duty: u32) {
        match self.pins.get_mut(&pin).and_then(|p| p.soft_pwm.as_mut()) {
            Some((current, range)) => *current = duty.min(*range),
            None => warn!("sim_gpio: GPIO {} has no software PWM, duty dropped", pin),
        }
    }
}
