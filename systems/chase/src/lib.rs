#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Enemy chase controller.
//!
//! Enemies steer straight at the player every tick. When the direct step
//! would push their hitbox into a wall they slide along it: the diagonal move
//! is tried first, then the horizontal component alone, then the vertical
//! component alone. Preferring the horizontal slide decides which way an
//! enemy rounds a corner, so the order is part of the behaviour.

use std::time::Duration;

use glam::Vec2;
use maze_survival_core::{
    EnemyId, EnemySnapshot, EnemyView, Event, GridCoord, MazeGrid, Position, TileKind,
};
use maze_survival_system_collision::{can_occupy, circles_overlap};
use rand::Rng;
use tracing::{debug, info, warn};

/// Single pursuing enemy.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    id: EnemyId,
    position: Position,
    velocity: Vec2,
    speed: f32,
    target: Position,
    retarget_timer: f32,
}

impl Enemy {
    /// Creates a stationary enemy at `position`.
    #[must_use]
    pub fn new(id: EnemyId, position: Position, speed: f32) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            speed,
            target: position,
            retarget_timer: 0.0,
        }
    }

    /// Identifier assigned at spawn.
    #[must_use]
    pub const fn id(&self) -> EnemyId {
        self.id
    }

    /// World position of the enemy centre.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Velocity applied during the most recent tick, in pixels per second.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Position the enemy last steered toward.
    #[must_use]
    pub const fn target(&self) -> Position {
        self.target
    }

    /// Seconds since the target was last refreshed.
    #[must_use]
    pub const fn retarget_timer(&self) -> f32 {
        self.retarget_timer
    }

    /// Captures an immutable copy for presentation.
    #[must_use]
    pub fn snapshot(&self) -> EnemySnapshot {
        EnemySnapshot {
            id: self.id,
            position: self.position,
            velocity: self.velocity,
            target: self.target,
            speed: self.speed,
        }
    }

    fn steer(&mut self, dt: f32, player: Position, radius: f32, grid: &MazeGrid) {
        let offset = player - self.position;
        let distance = offset.length();
        if !(distance > 0.0) {
            self.retarget_timer += dt;
            return;
        }

        let direction = offset / distance;
        let velocity = direction * self.speed;
        let proposed = self.position + velocity * dt;

        if can_occupy(proposed, radius, grid) {
            self.position = proposed;
            self.velocity = velocity;
        } else if can_occupy(Vec2::new(proposed.x, self.position.y), radius, grid) {
            self.position.x = proposed.x;
            self.velocity = Vec2::new(velocity.x, 0.0);
        } else if can_occupy(Vec2::new(self.position.x, proposed.y), radius, grid) {
            self.position.y = proposed.y;
            self.velocity = Vec2::new(0.0, velocity.y);
        } else {
            self.velocity = Vec2::ZERO;
        }

        self.target = player;
        self.retarget_timer = 0.0;
    }
}

/// Owns every enemy and advances them toward the player.
#[derive(Debug)]
pub struct ChaseController {
    speed: f32,
    radius: f32,
    enemies: Vec<Enemy>,
    next_id: u32,
}

impl ChaseController {
    /// Creates a controller whose enemies move at `speed` pixels per second
    /// and occupy a hitbox of half-width `radius`.
    #[must_use]
    pub fn new(speed: f32, radius: f32) -> Self {
        Self {
            speed,
            radius,
            enemies: Vec::new(),
            next_id: 0,
        }
    }

    /// Half-width of the enemy hitbox and radius of the catch circle.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Enemies currently in play, in spawn order.
    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Captures a read-only view of every enemy.
    #[must_use]
    pub fn view(&self) -> EnemyView {
        EnemyView::from_snapshots(self.enemies.iter().map(Enemy::snapshot).collect())
    }

    /// Replaces the roster with up to `count` enemies placed on road tiles at
    /// least `min_tile_distance` tiles from the player spawn tile.
    ///
    /// Each enemy draws its tile independently from the same candidate pool,
    /// so two enemies may share a tile. When no tile qualifies the roster
    /// stays short; the shortfall is logged and reported as an event rather
    /// than failing. Returns the number of enemies spawned.
    pub fn spawn_enemies<R>(
        &mut self,
        player_spawn: Position,
        count: usize,
        min_tile_distance: f32,
        grid: &MazeGrid,
        rng: &mut R,
        out: &mut Vec<Event>,
    ) -> usize
    where
        R: Rng + ?Sized,
    {
        self.reset();
        let candidates = spawn_candidates(player_spawn, min_tile_distance, grid);

        for ordinal in 1..=count {
            if candidates.is_empty() {
                warn!(enemy = ordinal, "no tile satisfies the spawn distance");
                continue;
            }

            let tile = candidates[rng.gen_range(0..candidates.len())];
            let position = grid.grid_to_world(tile);
            let enemy = self.place_enemy(position);
            debug!(
                enemy = enemy.get(),
                x = position.x,
                y = position.y,
                "spawned enemy"
            );
            out.push(Event::EnemySpawned {
                enemy,
                tile,
                position,
            });
        }

        let spawned = self.enemies.len();
        if spawned < count {
            warn!(requested = count, spawned, "spawned fewer enemies than requested");
            out.push(Event::SpawnShortfall {
                requested: count,
                spawned,
            });
        }
        info!(spawned, "enemies ready");
        spawned
    }

    /// Adds a stationary enemy at an explicit position.
    pub fn place_enemy(&mut self, position: Position) -> EnemyId {
        let id = EnemyId::new(self.next_id);
        self.next_id += 1;
        self.enemies.push(Enemy::new(id, position, self.speed));
        id
    }

    /// Moves every enemy toward the player for one tick.
    pub fn update(&mut self, dt: Duration, player: Position, grid: &MazeGrid) {
        let dt = dt.as_secs_f32();
        for enemy in &mut self.enemies {
            enemy.steer(dt, player, self.radius, grid);
        }
    }

    /// Reports whether any enemy's catch circle overlaps the player's.
    #[must_use]
    pub fn check_collision(&self, player: Position, player_radius: f32) -> bool {
        self.enemies
            .iter()
            .any(|enemy| circles_overlap(player, player_radius, enemy.position, self.radius))
    }

    /// Removes every enemy.
    pub fn reset(&mut self) {
        self.enemies.clear();
        self.next_id = 0;
    }
}

/// Road tiles far enough from the player spawn tile to host an enemy,
/// in row-major order.
#[must_use]
pub fn spawn_candidates(
    player_spawn: Position,
    min_tile_distance: f32,
    grid: &MazeGrid,
) -> Vec<GridCoord> {
    let spawn_tile = grid.world_to_grid(player_spawn);
    grid.iter()
        .filter(|(_, tile)| tile.kind() == TileKind::Road && tile.is_walkable())
        .map(|(coord, _)| coord)
        .filter(|coord| coord.euclidean_distance(spawn_tile) >= min_tile_distance)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_room() -> MazeGrid {
        MazeGrid::from_ascii(&["#####", "#...#", "#...#", "#...#", "#####"], 32.0)
            .expect("valid layout")
    }

    #[test]
    fn enemy_on_player_does_not_move() {
        let grid = open_room();
        let mut enemy = Enemy::new(EnemyId::new(0), Vec2::new(80.0, 80.0), 80.0);
        enemy.steer(0.1, Vec2::new(80.0, 80.0), 10.0, &grid);
        assert_eq!(enemy.position(), Vec2::new(80.0, 80.0));
        assert!(enemy.retarget_timer() > 0.0);
    }

    #[test]
    fn steering_refreshes_target() {
        let grid = open_room();
        let mut enemy = Enemy::new(EnemyId::new(0), Vec2::new(48.0, 48.0), 80.0);
        enemy.steer(0.1, Vec2::new(112.0, 112.0), 10.0, &grid);
        assert_eq!(enemy.target(), Vec2::new(112.0, 112.0));
        assert_eq!(enemy.retarget_timer(), 0.0);
    }

    #[test]
    fn reset_restarts_identifiers() {
        let mut chase = ChaseController::new(80.0, 10.0);
        let _ = chase.place_enemy(Vec2::ZERO);
        chase.reset();
        assert!(chase.enemies().is_empty());
        assert_eq!(chase.place_enemy(Vec2::ZERO), EnemyId::new(0));
    }
}
