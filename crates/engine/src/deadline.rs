//! Per-turn input deadline.
//!
//! A deadline is a plain value created at the start of a turn. Nothing fires
//! when it elapses; players ask it how long they may still wait. A new turn
//! gets a new value, so an old turn's expiry can never leak into the next one.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnDeadline {
    started: Instant,
    budget: Duration,
}

impl TurnDeadline {
    pub fn new(started: Instant, budget: Duration) -> Self {
        Self { started, budget }
    }

    /// Deadline starting now
    pub fn start(budget: Duration) -> Self {
        Self::new(Instant::now(), budget)
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    /// Time left at `now` (zero once elapsed)
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.budget
            .saturating_sub(now.saturating_duration_since(self.started))
    }

    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }

    pub fn expired_at(&self, now: Instant) -> bool {
        self.remaining_at(now).is_zero()
    }

    pub fn expired(&self) -> bool {
        self.expired_at(Instant::now())
    }
}
