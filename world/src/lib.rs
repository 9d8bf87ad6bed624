#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Maze Survival.
//!
//! The world owns the maze, the player, the enemies and the survival clock of
//! the current session, together with the seeded random source that feeds
//! maze carving and enemy placement. Every mutation goes through [`apply`];
//! everything else reads through [`query`].

mod survival;

use std::time::Duration;

use maze_survival_core::{
    Command, ConfigError, Event, GameConfig, GameStatus, MazeGrid, PlayerInput, WELCOME_BANNER,
};
use maze_survival_system_chase::ChaseController;
use maze_survival_system_maze_generation::MazeGenerator;
use maze_survival_system_player::Player;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use survival::{Advance, Survival};

/// Represents the authoritative Maze Survival world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    config: GameConfig,
    seed: u64,
    rng: ChaCha8Rng,
    generator: MazeGenerator,
    session: Session,
}

impl World {
    /// Creates a world and starts its first session.
    ///
    /// The configuration is validated before anything is generated. When it
    /// carries no seed one is drawn from the thread-local generator and
    /// logged so the run can be replayed.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let generator = MazeGenerator::new(&config.maze)?;
        info!(seed, "world seeded");

        let session = Session::assemble(&config, &generator, &mut rng, &mut Vec::new());
        Ok(Self {
            banner: WELCOME_BANNER,
            config,
            seed,
            rng,
            generator,
            session,
        })
    }

    fn tick(&mut self, dt: Duration, input: PlayerInput, out_events: &mut Vec<Event>) {
        let session = &mut self.session;
        match session.survival.advance(dt) {
            Advance::Halted => {
                debug!(status = ?session.survival.status(), "ignoring tick after session end");
                return;
            }
            Advance::Paused => return,
            Advance::Won => {
                out_events.push(Event::TimeAdvanced { dt });
                session.announce_status(out_events);
                return;
            }
            Advance::Running => out_events.push(Event::TimeAdvanced { dt }),
        }

        session.player.update(dt, input, &session.grid, out_events);
        let player = session.player.position();
        session.chase.update(dt, player, &session.grid);

        if session
            .chase
            .check_collision(player, session.player.catch_radius())
            && session.survival.lose()
        {
            session.announce_status(out_events);
        }
    }

    fn restart(&mut self, out_events: &mut Vec<Event>) {
        let mut staged = Vec::new();
        let session = Session::assemble(&self.config, &self.generator, &mut self.rng, &mut staged);
        self.session = session;
        info!("session restarted");
        out_events.append(&mut staged);
        out_events.push(Event::Restarted);
    }

    fn toggle_pause(&mut self, out_events: &mut Vec<Event>) {
        match self.session.survival.toggle_pause() {
            Some(paused) => {
                debug!(paused, "pause toggled");
                out_events.push(Event::PauseToggled { paused });
            }
            None => debug!("ignoring pause after session end"),
        }
    }
}

/// Everything a restart replaces at once.
#[derive(Debug)]
struct Session {
    grid: MazeGrid,
    player: Player,
    chase: ChaseController,
    survival: Survival,
}

impl Session {
    fn assemble(
        config: &GameConfig,
        generator: &MazeGenerator,
        rng: &mut ChaCha8Rng,
        out_events: &mut Vec<Event>,
    ) -> Self {
        let grid = generator.generate(rng);
        let roads = grid.road_count();
        info!(
            columns = grid.columns(),
            rows = grid.rows(),
            roads,
            "maze generated"
        );
        out_events.push(Event::MazeGenerated {
            columns: grid.columns(),
            rows: grid.rows(),
            roads,
        });

        let spawn = grid.spawn_position();
        let player = Player::spawn(spawn, config.player.clone(), config.stamina.clone());
        let mut chase = ChaseController::new(config.enemy.speed, config.enemy.radius);
        let _ = chase.spawn_enemies(
            spawn,
            config.enemy.count as usize,
            config.enemy.min_spawn_distance,
            &grid,
            rng,
            out_events,
        );

        Self {
            grid,
            player,
            chase,
            survival: Survival::new(config.survival.target_time()),
        }
    }

    fn announce_status(&self, out_events: &mut Vec<Event>) {
        let status = self.survival.status();
        let survival_time = self.survival.elapsed();
        match status {
            GameStatus::Won => info!(?survival_time, "player survived"),
            GameStatus::Lost => info!(?survival_time, "player caught"),
            GameStatus::Playing => {}
        }
        out_events.push(Event::StatusChanged {
            status,
            survival_time,
        });
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Ticks run the survival clock first, then the player, then the enemies,
/// then the catch check. Once a session has been won or lost only
/// [`Command::Restart`] has any effect.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt, input } => world.tick(dt, input, out_events),
        Command::Restart => world.restart(out_events),
        Command::TogglePause => world.toggle_pause(out_events),
    }
}

/// Hooks that let tests stage precise situations.
#[cfg(any(test, feature = "test_scaffolding"))]
impl World {
    /// Replaces the maze, keeping the player and enemies where they are.
    pub fn install_grid(&mut self, grid: MazeGrid) {
        self.session.grid = grid;
    }

    /// Moves the player without consulting the grid.
    pub fn set_player_position(&mut self, position: maze_survival_core::Position) {
        self.session.player.set_position(position);
    }

    /// Adds a stationary enemy at an explicit position.
    pub fn place_enemy(
        &mut self,
        position: maze_survival_core::Position,
    ) -> maze_survival_core::EnemyId {
        self.session.chase.place_enemy(position)
    }

    /// Removes every enemy.
    pub fn clear_enemies(&mut self) {
        self.session.chase.reset();
    }

    /// Overwrites the time survived so far.
    pub fn set_survival_time(&mut self, elapsed: Duration) {
        self.session.survival.set_elapsed(elapsed);
    }
}

/// Read-only access to the world.
pub mod query {
    use maze_survival_core::{
        EnemyView, GameConfig, GameStatus, MazeGrid, PlayerSnapshot, SurvivalSnapshot,
    };

    use super::World;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the current maze.
    #[must_use]
    pub fn grid(world: &World) -> &MazeGrid {
        &world.session.grid
    }

    /// Captures the player's state.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        world.session.player.snapshot()
    }

    /// Captures a read-only view of the enemies inhabiting the maze.
    #[must_use]
    pub fn enemy_view(world: &World) -> EnemyView {
        world.session.chase.view()
    }

    /// Captures the survival status, clock and enemies.
    #[must_use]
    pub fn survival(world: &World) -> SurvivalSnapshot {
        let survival = &world.session.survival;
        SurvivalSnapshot {
            status: survival.status(),
            survival_time: survival.elapsed(),
            target_time: survival.target(),
            enemies: enemy_view(world),
            paused: survival.is_paused(),
        }
    }

    /// Lifecycle status of the current session.
    #[must_use]
    pub fn status(world: &World) -> GameStatus {
        world.session.survival.status()
    }

    /// Reports whether the current session is paused.
    #[must_use]
    pub fn is_paused(world: &World) -> bool {
        world.session.survival.is_paused()
    }

    /// Seed that drives every maze and spawn of this world.
    #[must_use]
    pub fn seed(world: &World) -> u64 {
        world.seed
    }

    /// Configuration the world was created with.
    #[must_use]
    pub fn config(world: &World) -> &GameConfig {
        &world.config
    }
}
