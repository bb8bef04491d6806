//! led_demo: interactive RGB LED console.
//!
//! Type a letter and press enter: R G B C M Y W show a colour, F free-runs
//! the colour sequence, P pulses green with hardware PWM, S cross-fades with
//! software PWM, X exits.  F, P and S run until the process is interrupted.

use std::io;

use anyhow::{Context, Result};
use log::{debug, info};

use rgbled::adapters::console_sink::ConsoleSink;
use rgbled::adapters::delay::ThreadDelay;
use rgbled::adapters::open_gpio;
use rgbled::app::console::Console;
use rgbled::app::events::DemoEvent;
use rgbled::app::ports::EventSink;
use rgbled::config::DemoConfig;
use rgbled::drivers::run_control::StopToken;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("led_demo v{}", env!("CARGO_PKG_VERSION"));

    let config = DemoConfig::default();
    debug!("config: {}", serde_json::to_string(&config)?);

    let mut sink = ConsoleSink::stdout();
    sink.emit(&DemoEvent::Menu);

    let gpio = open_gpio(&config.pins).context("GPIO setup failed")?;
    let mut console = Console::new(gpio, config);

    // Never tripped: the animated modes run until Ctrl+C.
    let stop = StopToken::new();
    console
        .run(io::stdin().lock(), &mut sink, &mut ThreadDelay, &stop)
        .context("console input failed")?;

    Ok(())
}
