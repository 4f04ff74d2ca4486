//! Search timing.
//!
//! The search polls a `TimeSource` between candidate moves so it can hand
//! back its best answer when the budget runs out. `WallClock` is the real
//! thing; `ManualClock` lets tests dial in an elapsed time directly.

use std::time::Instant;

pub trait TimeSource {
    /// Restarts the measurement.
    fn reset(&mut self);
    /// Seconds since the last reset.
    fn elapsed_seconds(&self) -> f64;
}

#[derive(Debug, Clone)]
pub struct WallClock {
    started: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for WallClock {
    fn reset(&mut self) {
        self.started = Instant::now();
    }

    fn elapsed_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// Fixed-reading clock for deterministic tests.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    pub elapsed: f64,
}

impl TimeSource for ManualClock {
    fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }
}
