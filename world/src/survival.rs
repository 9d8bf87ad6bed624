//! Survival clock and win/lose lifecycle.

use std::time::Duration;

use maze_survival_core::GameStatus;

/// Outcome of offering a tick to the survival clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Advance {
    /// The session already ended; nothing may change.
    Halted,
    /// The session is paused; the clock did not move.
    Paused,
    /// The clock moved and the player has now survived the target time.
    Won,
    /// The clock moved and play continues.
    Running,
}

/// Status, elapsed time and pause flag of the current session.
#[derive(Debug)]
pub(crate) struct Survival {
    status: GameStatus,
    elapsed: Duration,
    target: Duration,
    paused: bool,
}

impl Survival {
    pub(crate) fn new(target: Duration) -> Self {
        Self {
            status: GameStatus::Playing,
            elapsed: Duration::ZERO,
            target,
            paused: false,
        }
    }

    pub(crate) const fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub(crate) const fn target(&self) -> Duration {
        self.target
    }

    pub(crate) const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Adds `dt` to the clock unless the session is over or paused.
    pub(crate) fn advance(&mut self, dt: Duration) -> Advance {
        if self.status.is_terminal() {
            return Advance::Halted;
        }
        if self.paused {
            return Advance::Paused;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.target {
            self.status = GameStatus::Won;
            Advance::Won
        } else {
            Advance::Running
        }
    }

    /// Ends a running session with a loss. Returns `false` if it had already ended.
    pub(crate) fn lose(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = GameStatus::Lost;
        true
    }

    /// Flips the pause flag while playing, returning the new flag.
    pub(crate) fn toggle_pause(&mut self) -> Option<bool> {
        if self.status.is_terminal() {
            return None;
        }
        self.paused = !self.paused;
        Some(self.paused)
    }

    #[cfg(any(test, feature = "test_scaffolding"))]
    pub(crate) fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }
}
