//! led_select: light exactly one LED of the RGB LED.
//!
//! `led_select red|green|blue` switches that LED on and the other two off.
//! No argument prints a usage line; an unknown colour switches all LEDs
//! off.  The exit status is 0 in every case except a GPIO setup failure.

use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use log::{info, warn};

use rgbled::adapters::console_sink::ConsoleSink;
use rgbled::adapters::open_gpio;
use rgbled::app::selector;
use rgbled::config::DemoConfig;
use rgbled::drivers::status_led::StatusLed;

#[derive(Debug, Parser)]
#[command(version, about = "Turn on one LED of the RGB LED, all others off")]
struct Cli {
    /// LED to switch on: red, green or blue
    #[arg(allow_hyphen_values = true)]
    colour: Option<String>,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,
}

/// Parse `args` the way `led_select` treats its command line.
///
/// Only `--help` and `--version` come back as `Err`.  Any other parse
/// failure keeps the first argument, lossily decoded, as the colour so it
/// reads as an unknown colour rather than a missing one.
fn parse_args<I, T>(args: I) -> std::result::Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(args.iter()) {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => Err(e),
        Err(e) => {
            warn!("led_select: ignoring arguments ({})", e.kind());
            Ok(Cli {
                colour: args.get(1).map(|a| a.to_string_lossy().into_owned()),
                rest: Vec::new(),
            })
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            return Ok(());
        }
    };
    if !cli.rest.is_empty() {
        info!("led_select: ignoring extra arguments {:?}", cli.rest);
    }

    let config = DemoConfig::default();
    let gpio = open_gpio(&config.pins).context("GPIO setup failed")?;
    let mut led = StatusLed::new(gpio, config.pins);

    let selected = selector::select(&mut led, cli.colour.as_deref(), &mut ConsoleSink::stdout());
    info!("led_select: {:?} on", selected);
    Ok(())
}
