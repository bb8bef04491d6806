//! LED drivers: static colour, free-run sequence, and the two fade modes.

pub mod free_run;
pub mod pulse;
pub mod run_control;
pub mod soft_fade;
pub mod status_led;
