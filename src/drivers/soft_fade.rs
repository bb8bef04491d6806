//! Software PWM cross-fade across [`COLOUR_SEQUENCE`].
//!
//! Every channel runs an emulated PWM line.  Between two consecutive
//! sequence colours each channel's duty moves by −1, 0 or +1 per step, so
//! after `steps` steps the duty lands exactly on `steps` (lit) or 0 (dark).

use embedded_hal::delay::DelayNs;
use log::info;

use crate::app::events::DemoEvent;
use crate::app::ports::{EventSink, GpioPort};
use crate::colour::{COLOUR_SEQUENCE, Channel, next_index};
use crate::config::FadeTiming;
use crate::error::Result;

use super::run_control::StopToken;
use super::status_led::StatusLed;

/// Per-channel duty interpolation between sequence entries.
#[derive(Debug, Clone)]
pub struct CrossFade {
    steps: u32,
    duty: [u32; 3],
    offset: [i32; 3],
    last: usize,
    next: usize,
    step: u32,
}

impl CrossFade {
    /// Start at the first sequence colour, fading towards the second.
    pub fn new(steps: u32) -> Self {
        let first = COLOUR_SEQUENCE[0];
        let duty = Channel::ALL.map(|c| if first.has_channel(c) { steps } else { 0 });
        let (last, next) = (0, next_index(0));
        Self {
            steps,
            duty,
            offset: offsets(last, next),
            last,
            next,
            step: 0,
        }
    }

    /// Current duty per channel, in [`Channel::ALL`] order.
    pub fn duties(&self) -> [u32; 3] {
        self.duty
    }

    /// `(last, next)` sequence indices of the segment in progress.
    pub fn segment(&self) -> (usize, usize) {
        (self.last, self.next)
    }

    /// Move one step and return the new duties.  Finishing a segment rolls
    /// over to the next pair of colours.
    pub fn advance(&mut self) -> [u32; 3] {
        for (duty, offset) in self.duty.iter_mut().zip(self.offset) {
            *duty = duty.saturating_add_signed(offset);
        }
        self.step += 1;
        if self.step >= self.steps {
            self.last = self.next;
            self.next = next_index(self.last);
            self.offset = offsets(self.last, self.next);
            self.step = 0;
        }
        self.duty
    }
}

/// Direction each channel moves in when fading from `last` to `next`.
fn offsets(last: usize, next: usize) -> [i32; 3] {
    let (from, to) = (COLOUR_SEQUENCE[last], COLOUR_SEQUENCE[next]);
    Channel::ALL.map(|c| to.level(c) - from.level(c))
}

/// Cross-fade through the sequence forever on all three channels.
pub fn soft_fade<G: GpioPort>(
    led: &mut StatusLed<G>,
    sink: &mut impl EventSink,
    delay: &mut impl DelayNs,
    stop: &StopToken,
    timing: FadeTiming,
) -> Result<()> {
    sink.emit(&DemoEvent::SoftFadeStarted);

    let pins = led.pins().all();
    let mut fade = CrossFade::new(timing.steps);
    for (pin, duty) in pins.into_iter().zip(fade.duties()) {
        led.gpio_mut().soft_pwm_create(pin, duty, timing.steps)?;
    }

    let interval_us = timing.step_interval_us();
    info!(
        "soft_fade: {} steps per colour, {} us/step",
        timing.steps, interval_us
    );

    loop {
        let duties = fade.advance();
        for (pin, duty) in pins.into_iter().zip(duties) {
            led.gpio_mut().soft_pwm_write(pin, duty);
        }
        delay.delay_us(interval_us);
        if stop.is_stopped() {
            info!("soft_fade: stopped in segment {:?}", fade.segment());
            return Ok(());
        }
    }
}
