//! Cooperative cancellation for the never-ending demo loops.
//!
//! Each loop checks its [`StopToken`] after every sleep.  The binaries
//! never trip it, so on hardware the loops run until the process is
//! interrupted; tests trip it to bound the iteration count.

use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag.  Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every loop holding a clone of this token to return.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
