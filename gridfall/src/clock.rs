use std::time::{Duration, Instant};

/// Default simulation cadence, matching the original frontend.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(800);

/// Wall-clock gate for simulation advancement.
///
/// [`TickClock::poll`] fires only when strictly more than `interval` has
/// elapsed since the last firing, and resets the reference point to the
/// moment of evaluation — not to the ideal tick boundary. Successive ticks
/// therefore drift by the polling latency. That is the original cadence and
/// is kept on purpose; do not "fix" it by scheduling against
/// `last_tick + interval`.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    last_tick: Instant,
    interval: Duration,
}

impl TickClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            last_tick: now,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// Evaluate one scheduling opportunity. Returns true when a tick should
    /// fire; the reference point then becomes `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) > self.interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}
