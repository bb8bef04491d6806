//! Application core: command decoding and the two command surfaces.
//!
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real pins.

pub mod commands;
pub mod console;
pub mod events;
pub mod ports;
pub mod selector;
