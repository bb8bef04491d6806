//! Integration tests: one-shot selector.

use rgbled::app::events::DemoEvent;
use rgbled::app::selector::select;
use rgbled::colour::Channel;
use rgbled::config::PinBinding;
use rgbled::drivers::status_led::StatusLed;

use crate::mock_hw::{MockGpio, RecordingSink};

fn run_select(arg: Option<&str>) -> ([Option<bool>; 3], Option<Channel>, RecordingSink) {
    let pins = PinBinding::default();
    let mut gpio = MockGpio::new();
    let mut sink = RecordingSink::new();
    let selected = select(&mut StatusLed::new(&mut gpio, pins), arg, &mut sink);
    (pins.all().map(|p| gpio.level(p)), selected, sink)
}

#[test]
fn green_lights_only_green() {
    let (levels, selected, sink) = run_select(Some("green"));
    assert_eq!(selected, Some(Channel::Green));
    assert_eq!(levels, [Some(false), Some(true), Some(false)]);
    assert_eq!(sink.events, [DemoEvent::Selected(Channel::Green)]);
}

#[test]
fn no_argument_prints_usage_and_switches_off() {
    let (levels, selected, sink) = run_select(None);
    assert_eq!(selected, None);
    assert_eq!(levels, [Some(false); 3]);
    assert_eq!(sink.events, [DemoEvent::SelectUsage]);
}

#[test]
fn unknown_colour_switches_off_quietly() {
    let (levels, selected, sink) = run_select(Some("purple"));
    assert_eq!(selected, None);
    assert_eq!(levels, [Some(false); 3]);
    assert!(sink.events.is_empty());
}

#[test]
fn match_is_case_sensitive() {
    let (levels, selected, _) = run_select(Some("Red"));
    assert_eq!(selected, None);
    assert_eq!(levels, [Some(false); 3]);
}
