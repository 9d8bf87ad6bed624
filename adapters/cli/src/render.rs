//! Plain-text rendering of the maze, the player and the enemies.

use maze_survival_core::{GameStatus, GridCoord, MazeGrid, PlayerSnapshot, SurvivalSnapshot};
use maze_survival_world::{query, World};

const WALL: char = '#';
const ROAD: char = '.';
const PLAYER: char = 'P';
const ENEMY: char = 'E';

/// Draws the world as one character per tile followed by a status line.
pub(crate) fn render(world: &World) -> String {
    let grid = query::grid(world);
    let player = query::player(world);
    let survival = query::survival(world);

    let mut frame = board(grid, &player, &survival);
    frame.push_str(&status_line(&player, &survival));
    frame.push('\n');
    frame
}

fn board(grid: &MazeGrid, player: &PlayerSnapshot, survival: &SurvivalSnapshot) -> String {
    let columns = grid.columns() as usize;
    let mut cells: Vec<Vec<char>> = (0..grid.rows())
        .map(|_| Vec::with_capacity(columns))
        .collect();
    for (coord, tile) in grid.iter() {
        if let Some(row) = cells.get_mut(coord.row() as usize) {
            row.push(if tile.is_walkable() { ROAD } else { WALL });
        }
    }

    let mut mark = |coord: GridCoord, glyph: char| {
        let (Ok(row), Ok(column)) = (usize::try_from(coord.row()), usize::try_from(coord.column()))
        else {
            return;
        };
        if let Some(cell) = cells.get_mut(row).and_then(|line| line.get_mut(column)) {
            *cell = glyph;
        }
    };
    for enemy in survival.enemies.iter() {
        mark(grid.world_to_grid(enemy.position), ENEMY);
    }
    mark(grid.world_to_grid(player.position), PLAYER);

    let mut text = String::with_capacity((columns + 1) * cells.len());
    for line in cells {
        text.extend(line);
        text.push('\n');
    }
    text
}

fn status_line(player: &PlayerSnapshot, survival: &SurvivalSnapshot) -> String {
    let status = match (survival.status, survival.paused) {
        (GameStatus::Playing, true) => "paused",
        (GameStatus::Playing, false) => "playing",
        (GameStatus::Won, _) => "won",
        (GameStatus::Lost, _) => "lost",
    };
    format!(
        "{status} {:.2}/{:.0}s stamina {:.0}/{:.0}{}",
        survival.survival_time.as_secs_f32(),
        survival.target_time.as_secs_f32(),
        player.stamina,
        player.max_stamina,
        if player.exhausted { " exhausted" } else { "" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn marks_player_and_enemies_on_the_board() {
        let mut world = World::new(maze_survival_core::GameConfig {
            seed: Some(12),
            ..Default::default()
        })
        .expect("default config is valid");
        world.install_grid(
            MazeGrid::from_ascii(&["#####", "#...#", "#####"], 32.0).expect("valid layout"),
        );
        world.clear_enemies();
        world.set_player_position(Vec2::new(48.0, 48.0));
        let _ = world.place_enemy(Vec2::new(112.0, 48.0));

        let frame = render(&world);
        let mut lines = frame.lines();
        assert_eq!(lines.next(), Some("#####"));
        assert_eq!(lines.next(), Some("#P.E#"));
        assert_eq!(lines.next(), Some("#####"));
        assert_eq!(lines.next(), Some("playing 0.00/30s stamina 100/100"));
    }
}
