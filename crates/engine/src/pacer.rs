//! Fixed-cadence frame pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps out the remainder of each tick so frames start a fixed period apart.
///
/// A frame that overruns the period is followed immediately by the next one;
/// missed ticks are not replayed.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    last_tick: Instant,
}

impl FramePacer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_tick: Instant::now(),
        }
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(Duration::from_millis(ms as u64))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// Time left in the current tick as seen at `now`.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.period
            .checked_sub(now.saturating_duration_since(self.last_tick))
            .unwrap_or_else(|| Duration::from_secs(0))
    }

    /// Block until the current tick ends, then start the next one.
    pub fn wait(&mut self) {
        let remaining = self.remaining_at(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
    }
}
