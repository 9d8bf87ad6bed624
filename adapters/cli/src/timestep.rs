//! Fixed-timestep accumulator that turns wall-clock frames into ticks.

use std::time::Duration;

use tracing::debug;

/// One simulation tick at 60 Hz.
pub(crate) const TICK: Duration = Duration::from_nanos(16_666_667);

/// Most ticks run for a single frame before the backlog is dropped.
pub(crate) const MAX_TICKS_PER_FRAME: u32 = 5;

/// Accumulates frame time and releases it in whole ticks.
#[derive(Debug)]
pub(crate) struct FixedTimestep {
    step: Duration,
    max_steps: u32,
    accumulator: Duration,
}

impl FixedTimestep {
    pub(crate) fn new(step: Duration, max_steps: u32) -> Self {
        Self {
            step,
            max_steps,
            accumulator: Duration::ZERO,
        }
    }

    /// Length of every tick released by [`FixedTimestep::advance`].
    pub(crate) const fn step(&self) -> Duration {
        self.step
    }

    /// Adds a frame and returns how many ticks should run for it.
    pub(crate) fn advance(&mut self, frame: Duration) -> u32 {
        self.accumulator = self.accumulator.saturating_add(frame);
        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if self.accumulator >= self.step {
            debug!(backlog = ?self.accumulator, "dropping simulation backlog");
            self.accumulator = Duration::ZERO;
        }
        steps
    }
}
