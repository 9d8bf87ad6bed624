use maze_survival_core::{PlayerMotion, StaminaConfig};

/// Change in exhaustion reported by [`Stamina::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaminaTransition {
    /// Stamina hit zero.
    Exhausted,
    /// Stamina climbed back above the recovery threshold.
    Recovered,
}

/// Stamina pool drained by movement and refilled by standing still.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamina {
    current: f32,
    max: f32,
    exhausted: bool,
}

impl Stamina {
    /// Creates a full pool.
    #[must_use]
    pub fn full(max: f32) -> Self {
        Self {
            current: max,
            max,
            exhausted: false,
        }
    }

    /// Remaining stamina.
    #[must_use]
    pub const fn current(&self) -> f32 {
        self.current
    }

    /// Pool size.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Whether the pool ran dry and has not yet recovered.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Multiplier applied to movement speed.
    #[must_use]
    pub fn speed_multiplier(&self, config: &StaminaConfig) -> f32 {
        if self.exhausted {
            config.exhausted_speed_multiplier
        } else {
            1.0
        }
    }

    /// Applies `dt` seconds of drain or recovery for the given gait.
    pub fn update(
        &mut self,
        dt: f32,
        motion: PlayerMotion,
        config: &StaminaConfig,
    ) -> Option<StaminaTransition> {
        let rate = match motion {
            PlayerMotion::Idle => config.idle_recovery_per_sec,
            PlayerMotion::Walking => -config.walk_cost_per_sec,
            PlayerMotion::Running => -config.run_cost_per_sec,
        };
        self.current = (self.current + rate * dt).clamp(0.0, self.max);

        if self.current <= 0.0 && !self.exhausted {
            self.exhausted = true;
            Some(StaminaTransition::Exhausted)
        } else if self.current > config.recovery_threshold && self.exhausted {
            self.exhausted = false;
            Some(StaminaTransition::Recovered)
        } else {
            None
        }
    }
}
