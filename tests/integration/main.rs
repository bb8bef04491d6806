//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises one command surface or
//! driver against the recording doubles in `mock_hw`.  All tests run on the
//! host with no GPIO hardware required.

mod console_tests;
mod driver_tests;
mod selector_tests;
