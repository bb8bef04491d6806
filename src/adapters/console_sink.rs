//! Console event sink adapter.
//!
//! Implements [`EventSink`] by writing one line per [`DemoEvent`] to a
//! text stream, stdout in production.  Write failures are logged and
//! otherwise ignored; the LEDs keep working without a terminal.

use std::io::{self, Stdout, Write};

use log::warn;

use crate::app::events::DemoEvent;
use crate::app::ports::EventSink;

pub struct ConsoleSink<W = Stdout> {
    out: W,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn emit(&mut self, event: &DemoEvent) {
        // Flush per line so prompts show up before blocking on input.
        if let Err(e) = writeln!(self.out, "{event}").and_then(|()| self.out.flush()) {
            warn!("console_sink: write failed: {}", e);
        }
    }
}
