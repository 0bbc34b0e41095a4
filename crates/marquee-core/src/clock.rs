//! Time sources driving the engine.
//!
//! The engine never reads a global clock. It is handed a [`Clock`] at
//! construction, which lets the browser, the native simulator and the tests
//! each decide what "now" means.

use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;

/// Monotonic time source, in seconds from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock backed by `instant::Instant` (uses `performance.now()` on wasm).
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
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
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock. Clones share the same time, so a test can keep one
/// copy and move another into the engine.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Turns successive frame timestamps into elapsed seconds.
///
/// The first frame, a clock going backwards, or a non-finite timestamp all
/// yield a delta of zero rather than something that could poison the
/// position accumulator.
#[derive(Clone, Debug, Default)]
pub struct FrameTimer {
    last: Option<f64>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delta(&mut self, now: f64) -> f64 {
        if !now.is_finite() {
            return 0.0;
        }
        let dt = match self.last {
            Some(prev) if now > prev => now - prev,
            _ => 0.0,
        };
        // keep the newest timestamp so a backwards jump re-bases the timer
        self.last = Some(now);
        dt
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
