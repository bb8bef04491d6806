//! Integration tests: drivers against the recording GPIO double.

use rgbled::colour::{COLOUR_SEQUENCE, Channel, Colour};
use rgbled::config::DemoConfig;
use rgbled::drivers::free_run::free_run;
use rgbled::drivers::pulse::{PulseCurve, pulse};
use rgbled::drivers::run_control::StopToken;
use rgbled::drivers::soft_fade::soft_fade;
use rgbled::drivers::status_led::StatusLed;

use crate::mock_hw::{MockGpio, RecordingSink, StoppingDelay};

#[test]
fn set_colour_writes_every_mask() {
    let config = DemoConfig::default();
    let mut gpio = MockGpio::new();
    let mut sink = RecordingSink::new();
    let mut led = StatusLed::new(&mut gpio, config.pins);

    for colour in Colour::ALL.iter().rev() {
        led.set_colour(*colour, &mut sink);
    }

    let mut expected = Colour::ALL.to_vec();
    expected.reverse();
    assert_eq!(gpio.colours(&config.pins), expected);
}

#[test]
fn white_twice_matches_white_once() {
    let config = DemoConfig::default();
    let pins = config.pins;
    let mut once = MockGpio::new();
    let mut twice = MockGpio::new();
    let mut sink = RecordingSink::new();

    StatusLed::new(&mut once, pins).set_colour(Colour::White, &mut sink);
    let mut led = StatusLed::new(&mut twice, pins);
    led.set_colour(Colour::White, &mut sink);
    led.set_colour(Colour::White, &mut sink);

    for channel in Channel::ALL {
        let pin = pins.pin(channel);
        assert_eq!(once.level(pin), twice.level(pin));
        assert_eq!(twice.level(pin), Some(true));
    }
}

#[test]
fn free_run_sleeps_half_a_second_per_colour() {
    let config = DemoConfig::default();
    let mut gpio = MockGpio::new();
    let mut sink = RecordingSink::new();
    let stop = StopToken::new();
    let mut delay = StoppingDelay::new(COLOUR_SEQUENCE.len(), stop.clone());

    let mut led = StatusLed::new(&mut gpio, config.pins);
    free_run(&mut led, &mut sink, &mut delay, &stop, config.free_run_step_ms);

    assert_eq!(led.current_colour(), Colour::White);
    assert_eq!(gpio.colours(&config.pins), COLOUR_SEQUENCE);
    assert!(delay.slept_us.iter().all(|&us| us == 500_000));
}

#[test]
fn pulse_full_cycle_peaks_at_1023() {
    let config = DemoConfig::default();
    let steps = config.pulse.steps as usize;
    let mut gpio = MockGpio::new();
    let mut sink = RecordingSink::new();
    let stop = StopToken::new();
    let mut delay = StoppingDelay::new(2 * steps, stop.clone());

    let mut led = StatusLed::new(&mut gpio, config.pins);
    pulse(&mut led, &mut sink, &mut delay, &stop, config.pulse).unwrap();

    let duties = gpio.pwm_duties();
    assert_eq!(duties.len(), 2 * steps);
    assert_eq!(duties[0], 0);
    assert_eq!(duties[steps], 1023);
    assert_eq!(duties.iter().max(), Some(&1023));
    // Ramp down ends one step above the bottom.
    let curve = PulseCurve::new(config.pulse.steps);
    assert_eq!(duties[2 * steps - 1], curve.duty(1));
    assert!(delay.slept_us.iter().all(|&us| us == 1953));
}

#[test]
fn soft_fade_is_exact_at_every_segment_boundary() {
    let config = DemoConfig::default();
    let steps = config.soft_fade.steps;
    let pins = config.pins;

    for segments in 1..=COLOUR_SEQUENCE.len() {
        let mut gpio = MockGpio::new();
        let mut sink = RecordingSink::new();
        let stop = StopToken::new();
        let mut delay = StoppingDelay::new(segments * steps as usize, stop.clone());

        let mut led = StatusLed::new(&mut gpio, pins);
        soft_fade(&mut led, &mut sink, &mut delay, &stop, config.soft_fade).unwrap();

        let target = COLOUR_SEQUENCE[segments % COLOUR_SEQUENCE.len()];
        for channel in Channel::ALL {
            let expected = if target.has_channel(channel) { steps } else { 0 };
            assert_eq!(
                gpio.soft_duty(pins.pin(channel)),
                Some(expected),
                "{channel} after {segments} segments"
            );
        }
    }
}
