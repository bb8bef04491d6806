//! Demo configuration parameters
//!
//! Pin binding and timing for every demo mode.  There is no persistent
//! source; the binaries run with [`DemoConfig::default()`].

use serde::{Deserialize, Serialize};

use crate::colour::Channel;
use crate::pins;

/// Channel → BCM pin mapping, fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinBinding {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl PinBinding {
    /// Pin driving `channel`.
    pub const fn pin(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// All three pins in channel order.
    pub const fn all(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Default for PinBinding {
    fn default() -> Self {
        Self {
            red: pins::LED_R_GPIO,
            green: pins::LED_G_GPIO,
            blue: pins::LED_B_GPIO,
        }
    }
}

/// Step count and repetition rate of a fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FadeTiming {
    /// Duty steps per ramp / cross-fade segment.
    pub steps: u32,
    /// Full cycles per second.
    pub freq_hz: u32,
}

impl FadeTiming {
    /// Sleep between two duty steps, in microseconds.  Zero fields count
    /// as 1 and the result is 0 once the step rate exceeds 1 MHz.
    pub fn step_interval_us(&self) -> u32 {
        let per_second = u64::from(self.freq_hz.max(1)) * u64::from(self.steps.max(1));
        (1_000_000 / per_second) as u32
    }
}

/// Core demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub pins: PinBinding,
    /// Hold time per colour in free-run mode (milliseconds)
    pub free_run_step_ms: u32,
    /// Hardware PWM pulse on the green channel
    pub pulse: FadeTiming,
    /// Software PWM cross-fade on all channels
    pub soft_fade: FadeTiming,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            pins: PinBinding::default(),
            free_run_step_ms: 500,
            pulse: FadeTiming {
                steps: 256,
                freq_hz: 2,
            },
            soft_fade: FadeTiming {
                steps: 100,
                freq_hz: 1,
            },
        }
    }
}
