#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Maze Survival engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! once per fixed tick, the world executes them via its `apply` entry point
//! and reports what happened as [`Event`] values. Read access flows through
//! immutable snapshots such as [`SurvivalSnapshot`] and [`EnemyView`], so
//! nothing outside the world can mutate simulation state.

mod config;
mod grid;

use std::time::Duration;

use glam::Vec2;

pub use config::{
    ConfigError, EnemyConfig, GameConfig, MazeConfig, PlayerConfig, StaminaConfig,
    SurvivalConfig, MIN_MAZE_EDGE,
};
pub use grid::{
    GridCoord, GridError, MazeGrid, MazeGridBuilder, Position, Tile, TileKind, WorldSize,
    SPAWN_TILE,
};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Maze Survival.";

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation by one fixed tick.
    Tick {
        /// Simulated time covered by the tick.
        dt: Duration,
        /// Player controls held during the tick.
        input: PlayerInput,
    },
    /// Discards the current session and starts over on a freshly generated maze.
    Restart,
    /// Pauses or resumes a session that is still being played.
    TogglePause,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the survival clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Announces that a new maze replaced the previous one.
    MazeGenerated {
        /// Tile columns of the new maze.
        columns: u32,
        /// Tile rows of the new maze.
        rows: u32,
        /// Number of walkable tiles carved.
        roads: usize,
    },
    /// Confirms that an enemy was placed into the maze.
    EnemySpawned {
        /// Identifier assigned to the enemy.
        enemy: EnemyId,
        /// Tile hosting the enemy.
        tile: GridCoord,
        /// World position of the enemy, the centre of `tile`.
        position: Position,
    },
    /// Reports that fewer enemies spawned than requested.
    SpawnShortfall {
        /// Number of enemies requested.
        requested: usize,
        /// Number of enemies actually spawned.
        spawned: usize,
    },
    /// Announces a survival status transition.
    StatusChanged {
        /// Status entered by the session.
        status: GameStatus,
        /// Survival time at the moment of the transition.
        survival_time: Duration,
    },
    /// Confirms that the session was paused or resumed.
    PauseToggled {
        /// Whether the session is now paused.
        paused: bool,
    },
    /// Confirms that the session restarted from scratch.
    Restarted,
    /// Reports that the player's stamina ran dry.
    PlayerExhausted,
    /// Reports that the player recovered from exhaustion.
    PlayerRecovered,
}

/// Lifecycle of a survival session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The player is still evading enemies.
    #[default]
    Playing,
    /// The player survived the target time.
    Won,
    /// An enemy caught the player.
    Lost,
}

impl GameStatus {
    /// Reports whether the session has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Player controls held during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlayerInput {
    /// Move toward decreasing rows.
    pub up: bool,
    /// Move toward increasing rows.
    pub down: bool,
    /// Move toward decreasing columns.
    pub left: bool,
    /// Move toward increasing columns.
    pub right: bool,
    /// Run instead of walk.
    pub run: bool,
}

impl PlayerInput {
    /// Reports whether any direction is held.
    #[must_use]
    pub const fn is_moving(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Unit-length (or zero) direction described by the held keys.
    ///
    /// Opposing keys cancel out; diagonals are normalised so they are not
    /// faster than straight movement.
    #[must_use]
    pub fn movement_vector(&self) -> Vec2 {
        let mut direction = Vec2::ZERO;
        if self.left {
            direction.x -= 1.0;
        }
        if self.right {
            direction.x += 1.0;
        }
        if self.up {
            direction.y -= 1.0;
        }
        if self.down {
            direction.y += 1.0;
        }
        direction.normalize_or_zero()
    }
}

/// Gait the player adopted during the most recent tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlayerMotion {
    /// Standing still.
    #[default]
    Idle,
    /// Moving at walking speed.
    Walking,
    /// Moving at running speed.
    Running,
}

/// Direction the player sprite faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Toward decreasing rows.
    Up,
    /// Toward increasing rows.
    #[default]
    Down,
    /// Toward decreasing columns.
    Left,
    /// Toward increasing columns.
    Right,
}

/// Unique identifier assigned to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Immutable representation of a single enemy used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemySnapshot {
    /// Unique identifier assigned to the enemy.
    pub id: EnemyId,
    /// World position of the enemy centre.
    pub position: Position,
    /// Velocity applied during the most recent tick, in pixels per second.
    pub velocity: Vec2,
    /// Position the enemy is steering toward.
    pub target: Position,
    /// Chase speed in pixels per second.
    pub speed: f32,
}

/// Read-only snapshot describing all enemies within the maze.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnemyView {
    snapshots: Vec<EnemySnapshot>,
}

impl EnemyView {
    /// Creates a new enemy view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<EnemySnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured enemy snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
        self.snapshots.iter()
    }

    /// Number of enemies captured by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether the view captured no enemies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<EnemySnapshot> {
        self.snapshots
    }
}

/// Immutable representation of the player used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerSnapshot {
    /// World position of the player centre.
    pub position: Position,
    /// Velocity applied during the most recent tick, in pixels per second.
    pub velocity: Vec2,
    /// Half-width of the square hitbox tested against walls.
    pub hitbox_radius: f32,
    /// Radius of the circle tested against enemies.
    pub catch_radius: f32,
    /// Gait adopted during the most recent tick.
    pub motion: PlayerMotion,
    /// Direction the player faces.
    pub facing: Facing,
    /// Remaining stamina.
    pub stamina: f32,
    /// Stamina pool size.
    pub max_stamina: f32,
    /// Whether the player is exhausted and slowed.
    pub exhausted: bool,
}

/// Survival state exposed to HUDs and outer loops.
#[derive(Clone, Debug, PartialEq)]
pub struct SurvivalSnapshot {
    /// Current lifecycle status.
    pub status: GameStatus,
    /// Time survived so far.
    pub survival_time: Duration,
    /// Time the player must survive to win.
    pub target_time: Duration,
    /// Enemies as of the most recent tick.
    pub enemies: EnemyView,
    /// Whether the session is paused.
    pub paused: bool,
}

impl SurvivalSnapshot {
    /// Time left before the player wins, zero once reached.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.target_time.saturating_sub(self.survival_time)
    }
}
