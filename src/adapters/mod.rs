//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter        | Implements | Connects to                     |
//! |----------------|------------|---------------------------------|
//! | `rpi_gpio`     | GpioPort   | Raspberry Pi GPIO/PWM via rppal |
//! | `sim_gpio`     | GpioPort   | In-memory pin model             |
//! | `console_sink` | EventSink  | stdout                          |
//! | `delay`        | DelayNs    | `std::thread::sleep`            |

pub mod console_sink;
pub mod delay;
#[cfg(feature = "rpi")]
pub mod rpi_gpio;
pub mod sim_gpio;

use crate::config::PinBinding;
use crate::error::Result;

/// GPIO adapter the binaries run against.
#[cfg(feature = "rpi")]
pub type PlatformGpio = rpi_gpio::RpiGpio;

/// GPIO adapter the binaries run against.
#[cfg(not(feature = "rpi"))]
pub type PlatformGpio = sim_gpio::SimGpio;

/// One-time GPIO setup: open the peripheral and make the bound pins outputs.
#[cfg(feature = "rpi")]
pub fn open_gpio(binding: &PinBinding) -> Result<PlatformGpio> {
    rpi_gpio::RpiGpio::setup(binding)
}

/// One-time GPIO setup.  Built without `rpi`, so pins are simulated.
#[cfg(not(feature = "rpi"))]
pub fn open_gpio(binding: &PinBinding) -> Result<PlatformGpio> {
    log::warn!("built without the `rpi` feature, GPIO is simulated");
    Ok(sim_gpio::SimGpio::setup(binding))
}
