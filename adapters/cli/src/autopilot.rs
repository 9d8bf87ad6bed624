//! Scripted stand-ins for a human at the keyboard.

use clap::ValueEnum;
use glam::Vec2;
use maze_survival_core::{EnemyView, GridCoord, MazeGrid, PlayerInput, Position};
use maze_survival_world::{query, World};

/// Enemies closer than this many tiles make the fleeing autopilot sprint.
const SPRINT_TILES: f32 = 5.0;

/// Input policy driving the player during a headless run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Autopilot {
    /// Never touches the keys.
    Idle,
    /// Steps toward whichever neighbouring road tile lies farthest from the
    /// nearest enemy.
    #[default]
    Flee,
}

impl Autopilot {
    /// Chooses the keys to hold for the next tick.
    pub(crate) fn input(self, world: &World) -> PlayerInput {
        match self {
            Self::Idle => PlayerInput::default(),
            Self::Flee => flee(
                query::grid(world),
                query::player(world).position,
                &query::enemy_view(world),
            ),
        }
    }
}

fn flee(grid: &MazeGrid, player: Position, enemies: &EnemyView) -> PlayerInput {
    let Some(threat) = nearest_enemy(player, enemies) else {
        return PlayerInput::default();
    };

    let tile = grid.world_to_grid(player);
    let best = [(0, -1), (0, 1), (-1, 0), (1, 0)]
        .into_iter()
        .map(|(dc, dr)| tile.offset(dc, dr))
        .filter(|next| grid.is_walkable(*next))
        .map(|next| (next, grid.grid_to_world(next).distance(threat)))
        .max_by(|a, b| a.1.total_cmp(&b.1));

    let Some((target, _)) = best else {
        return PlayerInput::default();
    };

    let mut input = keys_toward(player, grid.grid_to_world(target), tile, target);
    input.run = player.distance(threat) < SPRINT_TILES * grid.tile_length();
    input
}

fn nearest_enemy(player: Position, enemies: &EnemyView) -> Option<Position> {
    enemies
        .iter()
        .map(|enemy| enemy.position)
        .min_by(|a, b| a.distance(player).total_cmp(&b.distance(player)))
}

/// Holds the key for the step from `from` to `to`, plus the cross-axis key
/// that recentres the player in its corridor.
fn keys_toward(player: Position, centre: Vec2, from: GridCoord, to: GridCoord) -> PlayerInput {
    const SLACK: f32 = 1.0;
    let offset = centre - player;
    let mut input = PlayerInput::default();
    if to.column() != from.column() {
        input.left = to.column() < from.column();
        input.right = to.column() > from.column();
        input.up = offset.y < -SLACK;
        input.down = offset.y > SLACK;
    } else {
        input.up = to.row() < from.row();
        input.down = to.row() > from.row();
        input.left = offset.x < -SLACK;
        input.right = offset.x > SLACK;
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_survival_core::{EnemyId, EnemySnapshot};

    fn corridor() -> MazeGrid {
        MazeGrid::from_ascii(&["#######", "#.....#", "#######"], 32.0).expect("valid layout")
    }

    fn enemies_at(position: Position) -> EnemyView {
        EnemyView::from_snapshots(vec![EnemySnapshot {
            id: EnemyId::new(0),
            position,
            velocity: Vec2::ZERO,
            target: position,
            speed: 80.0,
        }])
    }

    #[test]
    fn flees_away_from_the_enemy() {
        let grid = corridor();
        let player = Vec2::new(112.0, 48.0);
        let input = flee(&grid, player, &enemies_at(Vec2::new(176.0, 48.0)));
        assert!(input.left && !input.right, "{input:?}");
        assert!(input.run, "enemy within sprint range");
    }

    #[test]
    fn stays_put_without_enemies() {
        let grid = corridor();
        let input = flee(&grid, Vec2::new(112.0, 48.0), &EnemyView::default());
        assert!(!input.is_moving());
    }

    #[test]
    fn cornered_player_stays_still() {
        let grid = MazeGrid::from_ascii(&["###", "#.#", "###"], 32.0).expect("valid layout");
        let input = flee(&grid, Vec2::new(48.0, 48.0), &enemies_at(Vec2::new(48.0, 60.0)));
        assert!(!input.is_moving());
    }

    #[test]
    fn recentres_on_the_cross_axis() {
        let input = keys_toward(
            Vec2::new(48.0, 40.0),
            Vec2::new(80.0, 48.0),
            GridCoord::new(1, 1),
            GridCoord::new(2, 1),
        );
        assert!(input.right && input.down && !input.up && !input.left);
    }
}
