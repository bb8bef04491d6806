//! RGB LED demo library.
//!
//! Drives a three-line RGB LED through a narrow [`GpioPort`] capability so
//! the demo logic runs unchanged on a Raspberry Pi (feature `rpi`), on a
//! host with simulated pins, or against recording doubles in tests.
//!
//! [`GpioPort`]: app::ports::GpioPort

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod colour;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;

pub use error::{Error, Result};
