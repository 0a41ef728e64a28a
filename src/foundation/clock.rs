use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of timestamps, in milliseconds, for the animation engine.
///
/// Timestamps only need to be monotonic relative to each other; their origin is arbitrary.
pub trait Clock {
    /// Current timestamp in milliseconds.
    fn now_ms(&self) -> f64;
}

/// Monotonic wall clock measured from its own construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Start a clock at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Manually stepped clock for headless simulation and tests.
///
/// Clones share the same time source, so a test can keep a handle while the engine owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Create a clock starting at `start_ms`.
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    /// Jump to an absolute timestamp.
    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    /// Move time forward by `ms`.
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/clock.rs"]
mod tests;
