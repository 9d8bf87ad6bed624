#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Player movement and stamina.
//!
//! The player walks or runs in the direction of the held keys. Proposed
//! positions are clamped to the world rectangle and then applied one axis at
//! a time through the collision probe, horizontal first, so pressing into a
//! wall diagonally slides along it instead of stopping dead.

mod stamina;

use std::time::Duration;

use glam::Vec2;
use maze_survival_core::{
    Event, Facing, MazeGrid, PlayerConfig, PlayerInput, PlayerMotion, PlayerSnapshot, Position,
    StaminaConfig,
};
use maze_survival_system_collision::can_occupy;
use tracing::debug;

pub use stamina::{Stamina, StaminaTransition};

/// The player avatar.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    position: Position,
    velocity: Vec2,
    motion: PlayerMotion,
    facing: Facing,
    stamina: Stamina,
    config: PlayerConfig,
    stamina_config: StaminaConfig,
}

impl Player {
    /// Places an idle player with a full stamina pool at `position`.
    #[must_use]
    pub fn spawn(position: Position, config: PlayerConfig, stamina_config: StaminaConfig) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            motion: PlayerMotion::Idle,
            facing: Facing::default(),
            stamina: Stamina::full(config.max_stamina),
            config,
            stamina_config,
        }
    }

    /// World position of the player centre.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Velocity chosen during the most recent tick.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Gait adopted during the most recent tick.
    #[must_use]
    pub const fn motion(&self) -> PlayerMotion {
        self.motion
    }

    /// Direction the player faces.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.facing
    }

    /// Stamina pool.
    #[must_use]
    pub const fn stamina(&self) -> &Stamina {
        &self.stamina
    }

    /// Radius of the circle tested against enemies.
    #[must_use]
    pub const fn catch_radius(&self) -> f32 {
        self.config.catch_radius
    }

    /// Moves the player without consulting the grid.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Advances the player by one tick of `input`.
    ///
    /// The gait is chosen from the exhaustion state at the start of the tick,
    /// stamina is charged for that gait, and only then is the player moved.
    pub fn update(
        &mut self,
        dt: Duration,
        input: PlayerInput,
        grid: &MazeGrid,
        out_events: &mut Vec<Event>,
    ) {
        let dt = dt.as_secs_f32();
        self.steer(input);

        match self.stamina.update(dt, self.motion, &self.stamina_config) {
            Some(StaminaTransition::Exhausted) => {
                debug!("player exhausted");
                out_events.push(Event::PlayerExhausted);
            }
            Some(StaminaTransition::Recovered) => {
                debug!("player recovered");
                out_events.push(Event::PlayerRecovered);
            }
            None => {}
        }

        self.advance(dt, grid);
    }

    /// Captures an immutable copy for presentation.
    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            position: self.position,
            velocity: self.velocity,
            hitbox_radius: self.config.hitbox_radius,
            catch_radius: self.config.catch_radius,
            motion: self.motion,
            facing: self.facing,
            stamina: self.stamina.current(),
            max_stamina: self.stamina.max(),
            exhausted: self.stamina.is_exhausted(),
        }
    }

    fn steer(&mut self, input: PlayerInput) {
        if !input.is_moving() {
            self.motion = PlayerMotion::Idle;
            self.velocity = Vec2::ZERO;
            return;
        }

        let running = input.run && !self.stamina.is_exhausted();
        let (motion, base_speed) = if running {
            (PlayerMotion::Running, self.config.run_speed)
        } else {
            (PlayerMotion::Walking, self.config.walk_speed)
        };
        let direction = input.movement_vector();
        self.motion = motion;
        self.velocity =
            direction * base_speed * self.stamina.speed_multiplier(&self.stamina_config);
        if let Some(facing) = facing_for(direction) {
            self.facing = facing;
        }
    }

    fn advance(&mut self, dt: f32, grid: &MazeGrid) {
        let radius = self.config.hitbox_radius;
        let size = grid.world_size();
        let proposed = self.position + self.velocity * dt;
        let clamped = Vec2::new(
            clamp_axis(proposed.x, radius, size.width),
            clamp_axis(proposed.y, radius, size.height),
        );

        if can_occupy(Vec2::new(clamped.x, self.position.y), radius, grid) {
            self.position.x = clamped.x;
        }
        if can_occupy(Vec2::new(self.position.x, clamped.y), radius, grid) {
            self.position.y = clamped.y;
        }
    }
}

fn clamp_axis(value: f32, radius: f32, extent: f32) -> f32 {
    value.max(radius).min(extent - radius)
}

fn facing_for(direction: Vec2) -> Option<Facing> {
    if direction.x.abs() > direction.y.abs() {
        Some(if direction.x > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        })
    } else if direction.y != 0.0 {
        Some(if direction.y > 0.0 {
            Facing::Down
        } else {
            Facing::Up
        })
    } else {
        None
    }
}
