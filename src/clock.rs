//! Frame clock: measures elapsed time between idle ticks.

use std::time::{Duration, Instant};

/// A stop / measure / restart clock.
///
/// [`FrameClock::lap`] returns the seconds since the previous lap and restarts
/// the measurement. The first lap returns `0.0`, so startup time is never
/// reported as one long frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    started: Instant,
    lapped: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { started: Instant::now(), lapped: false }
    }

    /// Time since the last restart, without restarting.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Restart the measurement from now.
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    /// Seconds since the last lap, then restart.
    pub fn lap(&mut self) -> f32 {
        let now = Instant::now();
        let dt = if self.lapped {
            now.duration_since(self.started).as_secs_f32()
        } else {
            self.lapped = true;
            0.0
        };
        self.started = now;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
