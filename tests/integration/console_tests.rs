//! Integration tests: interactive console → drivers → GPIO.

use rgbled::app::console::Console;
use rgbled::app::events::DemoEvent;
use rgbled::app::ports::PinMode;
use rgbled::colour::{COLOUR_SEQUENCE, Colour};
use rgbled::config::DemoConfig;
use rgbled::drivers::pulse::PulseCurve;
use rgbled::drivers::run_control::StopToken;

use crate::mock_hw::{GpioCall, MockGpio, RecordingSink, StoppingDelay};

fn run(input: &[u8], delay_limit: usize) -> (MockGpio, RecordingSink) {
    let mut gpio = MockGpio::new();
    let mut sink = RecordingSink::new();
    let stop = StopToken::new();
    let mut delay = StoppingDelay::new(delay_limit, stop.clone());
    let mut console = Console::new(&mut gpio, DemoConfig::default());
    console
        .run(input, &mut sink, &mut delay, &stop)
        .expect("console run");
    (gpio, sink)
}

#[test]
fn red_then_exit() {
    let (gpio, sink) = run(b"R\nX\n", usize::MAX);
    let pins = DemoConfig::default().pins;

    assert_eq!(gpio.colours(&pins), [Colour::Red]);
    assert_eq!(gpio.calls.len(), 3);
    assert_eq!(
        sink.lines(),
        ["Turning Red on", "Turning Green off", "Turning Blue off", "Exiting."]
    );
}

#[test]
fn nothing_is_written_after_exit() {
    let (gpio, sink) = run(b"G\nX\nB\nW\n", usize::MAX);
    let pins = DemoConfig::default().pins;

    assert_eq!(gpio.colours(&pins), [Colour::Green]);
    assert_eq!(sink.events.last(), Some(&DemoEvent::Exiting));
}

#[test]
fn keys_are_case_insensitive_and_unknown_keys_switch_off() {
    let (gpio, _) = run(b"c\nm\ny\nw\nq\n", usize::MAX);
    let pins = DemoConfig::default().pins;

    assert_eq!(
        gpio.colours(&pins),
        [Colour::Cyan, Colour::Magenta, Colour::Yellow, Colour::White, Colour::Off]
    );
}

#[test]
fn end_of_input_exits_like_x() {
    let (gpio, sink) = run(b"b", usize::MAX);
    let pins = DemoConfig::default().pins;

    assert_eq!(gpio.colours(&pins), [Colour::Blue]);
    assert_eq!(sink.events.last(), Some(&DemoEvent::Exiting));
}

#[test]
fn free_run_cycles_until_stopped() {
    let (gpio, sink) = run(b"F\nR\n", 9);
    let pins = DemoConfig::default().pins;

    let shown = gpio.colours(&pins);
    assert_eq!(shown.len(), 9);
    assert_eq!(&shown[..8], &COLOUR_SEQUENCE);
    assert_eq!(shown[8], COLOUR_SEQUENCE[0]);
    assert!(sink.events.contains(&DemoEvent::FreeRunStarted));
    // The queued `R` is never processed once the loop is stopped.
    assert_eq!(sink.events.last(), Some(&DemoEvent::Exiting));
}

#[test]
fn pulse_switches_off_then_drives_green_pwm() {
    let (gpio, sink) = run(b"p", 3);
    let config = DemoConfig::default();
    let green = config.pins.green;
    let curve = PulseCurve::new(config.pulse.steps);

    assert_eq!(&gpio.colours(&config.pins)[..1], &[Colour::Off]);
    assert_eq!(
        gpio.calls[3],
        GpioCall::SetMode {
            pin: green,
            mode: PinMode::HardwarePwm
        }
    );
    assert_eq!(gpio.pwm_duties(), [curve.duty(0), curve.duty(1), curve.duty(2)]);
    assert!(gpio.calls.contains(&GpioCall::SetMode {
        pin: green,
        mode: PinMode::Output
    }));
    assert!(sink.events.contains(&DemoEvent::PulseStarted));
}

#[test]
fn soft_fade_reaches_second_colour() {
    let config = DemoConfig::default();
    let steps = config.soft_fade.steps;
    let (gpio, sink) = run(b"S", steps as usize);
    let pins = config.pins;

    // Red → Blue after one full segment.
    assert_eq!(gpio.soft_duty(pins.red), Some(0));
    assert_eq!(gpio.soft_duty(pins.green), Some(0));
    assert_eq!(gpio.soft_duty(pins.blue), Some(steps));
    assert!(gpio.calls.contains(&GpioCall::SoftCreate {
        pin: pins.red,
        initial: steps,
        range: steps
    }));
    assert!(sink.events.contains(&DemoEvent::SoftFadeStarted));
}
