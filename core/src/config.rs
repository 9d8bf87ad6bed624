//! Tunable game parameters and their validation.
//!
//! Every section deserialises with `#[serde(default)]`, so a configuration
//! file only needs to mention the values it overrides.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::GridError;

/// Smallest maze edge that still leaves room for a carved interior.
pub const MIN_MAZE_EDGE: u32 = 5;

/// Complete configuration for a survival session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maze dimensions.
    pub maze: MazeConfig,
    /// Win condition parameters.
    pub survival: SurvivalConfig,
    /// Enemy spawn and chase parameters.
    pub enemy: EnemyConfig,
    /// Player movement parameters.
    pub player: PlayerConfig,
    /// Stamina drain and recovery rates.
    pub stamina: StaminaConfig,
    /// Seed for every random decision; drawn at startup when absent.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Checks every section, reporting the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.maze.validate()?;
        self.survival.validate()?;
        self.enemy.validate()?;
        self.player.validate()?;
        self.stamina.validate()
    }
}

/// Maze dimensions in tiles and pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Tile columns; must be odd and at least [`MIN_MAZE_EDGE`].
    pub columns: u32,
    /// Tile rows; must be odd and at least [`MIN_MAZE_EDGE`].
    pub rows: u32,
    /// Edge length of a square tile in pixels.
    pub tile_length: f32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            columns: 21,
            rows: 21,
            tile_length: 32.0,
        }
    }
}

impl MazeConfig {
    /// Rejects even or undersized dimensions and degenerate tiles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_edge("columns", self.columns)?;
        validate_edge("rows", self.rows)?;
        positive("maze.tile_length", self.tile_length)
    }
}

fn validate_edge(axis: &'static str, value: u32) -> Result<(), ConfigError> {
    if value < MIN_MAZE_EDGE {
        return Err(ConfigError::MazeTooSmall { axis, value });
    }
    if value % 2 == 0 {
        return Err(ConfigError::EvenMazeDimension { axis, value });
    }
    Ok(())
}

/// Win condition parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvivalConfig {
    /// Seconds the player must survive to win.
    pub target_secs: f32,
}

impl Default for SurvivalConfig {
    fn default() -> Self {
        Self { target_secs: 30.0 }
    }
}

impl SurvivalConfig {
    /// Survival target as a duration.
    #[must_use]
    pub fn target_time(&self) -> Duration {
        Duration::try_from_secs_f32(self.target_secs).unwrap_or(Duration::MAX)
    }

    /// Rejects non-positive targets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("survival.target_secs", self.target_secs)
    }
}

/// Enemy spawn and chase parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Number of enemies spawned per maze.
    pub count: u32,
    /// Chase speed in pixels per second.
    pub speed: f32,
    /// Half-width of the square hitbox and radius of the catch circle.
    pub radius: f32,
    /// Minimum straight-line distance in tiles between a spawn tile and the
    /// player spawn tile.
    pub min_spawn_distance: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            count: 2,
            speed: 80.0,
            radius: 10.0,
            min_spawn_distance: 8.0,
        }
    }
}

impl EnemyConfig {
    /// Rejects empty enemy rosters and degenerate motion parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::NoEnemies);
        }
        non_negative("enemy.speed", self.speed)?;
        positive("enemy.radius", self.radius)?;
        non_negative("enemy.min_spawn_distance", self.min_spawn_distance)
    }
}

/// Player movement parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Walking speed in pixels per second.
    pub walk_speed: f32,
    /// Running speed in pixels per second.
    pub run_speed: f32,
    /// Half-width of the square hitbox tested against walls.
    pub hitbox_radius: f32,
    /// Radius of the circle tested against enemies.
    pub catch_radius: f32,
    /// Stamina pool size.
    pub max_stamina: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 100.0,
            run_speed: 200.0,
            hitbox_radius: 10.0,
            catch_radius: 12.0,
            max_stamina: 100.0,
        }
    }
}

impl PlayerConfig {
    /// Rejects negative speeds and degenerate radii.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("player.walk_speed", self.walk_speed)?;
        non_negative("player.run_speed", self.run_speed)?;
        positive("player.hitbox_radius", self.hitbox_radius)?;
        positive("player.catch_radius", self.catch_radius)?;
        positive("player.max_stamina", self.max_stamina)
    }
}

/// Stamina drain and recovery rates, all per second.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaConfig {
    /// Drain while walking.
    pub walk_cost_per_sec: f32,
    /// Drain while running.
    pub run_cost_per_sec: f32,
    /// Recovery while standing still.
    pub idle_recovery_per_sec: f32,
    /// Speed multiplier applied while exhausted.
    pub exhausted_speed_multiplier: f32,
    /// Stamina level above which exhaustion ends.
    pub recovery_threshold: f32,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            walk_cost_per_sec: 1.0,
            run_cost_per_sec: 3.0,
            idle_recovery_per_sec: 2.0,
            exhausted_speed_multiplier: 0.5,
            recovery_threshold: 20.0,
        }
    }
}

impl StaminaConfig {
    /// Rejects negative rates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("stamina.walk_cost_per_sec", self.walk_cost_per_sec)?;
        non_negative("stamina.run_cost_per_sec", self.run_cost_per_sec)?;
        non_negative("stamina.idle_recovery_per_sec", self.idle_recovery_per_sec)?;
        non_negative(
            "stamina.exhausted_speed_multiplier",
            self.exhausted_speed_multiplier,
        )?;
        non_negative("stamina.recovery_threshold", self.recovery_threshold)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// Configuration violations detected before a session starts.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Carving on a step-2 lattice needs odd edges to keep a one-tile border.
    #[error("maze {axis} must be odd, got {value}")]
    EvenMazeDimension {
        /// Offending axis, `columns` or `rows`.
        axis: &'static str,
        /// Configured value.
        value: u32,
    },
    /// The maze edge leaves no room for an interior.
    #[error("maze {axis} must be at least {min}, got {value}", min = MIN_MAZE_EDGE)]
    MazeTooSmall {
        /// Offending axis, `columns` or `rows`.
        axis: &'static str,
        /// Configured value.
        value: u32,
    },
    /// At least one enemy is required.
    #[error("enemy count must be positive")]
    NoEnemies,
    /// A value that must be strictly positive is not.
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Configured value.
        value: f32,
    },
    /// A value that must not be negative is.
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Configured value.
        value: f32,
    },
    /// The configured dimensions cannot back a tile grid.
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
}
