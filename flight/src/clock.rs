//! Time sources for race timing.
//!
//! The race track never reads the wall clock directly. Interactive hosts use
//! [`MonotonicClock`]; fixed-step hosts and tests use [`SimClock`], which only
//! moves when the host advances it, so timings are reproducible.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Time since an arbitrary, fixed origin.
    fn now(&self) -> Duration;
}

#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimClock {
    elapsed: Duration,
}

impl SimClock {
    /// Step forward by `dt` seconds. Non-positive or non-finite steps are ignored.
    pub fn advance(&mut self, dt: f32) {
        if let Ok(step) = Duration::try_from_secs_f32(dt) {
            if !step.is_zero() {
                self.elapsed = self.elapsed.saturating_add(step);
            }
        }
    }

    pub fn advance_by(&mut self, step: Duration) {
        self.elapsed = self.elapsed.saturating_add(step);
    }
}

impl Clock for SimClock {
    fn now(&self) -> Duration {
        self.elapsed
    }
}
