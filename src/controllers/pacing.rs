// src/controllers/pacing.rs
// Caps how often the session steps, independent of the display refresh rate

use std::time::Duration;

pub struct FramePacer {
    interval: Duration,
    accumulated: Duration,
}

impl FramePacer {
    pub fn new(frame_rate: f64) -> Self {
        let interval = Duration::try_from_secs_f64(1.0 / frame_rate).unwrap_or(Duration::MAX);
        Self {
            interval,
            // The very first update always produces a frame
            accumulated: interval,
        }
    }

    #[cfg(test)]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Adds the time since the previous update and reports whether a frame is
    /// due. At most one frame is owed at any time, so a stall is not followed
    /// by a burst of catch-up frames.
    pub fn tick(&mut self, since_last: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(since_last);
        if self.accumulated < self.interval {
            return false;
        }

        self.accumulated -= self.interval;
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
        }
        true
    }
}
