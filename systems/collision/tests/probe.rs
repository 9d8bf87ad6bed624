use glam::Vec2;
use maze_survival_core::MazeGrid;
use maze_survival_system_collision::can_occupy;

const TILE: f32 = 32.0;
const RADIUS: f32 = 10.0;

fn split_room() -> MazeGrid {
    MazeGrid::from_ascii(
        &[
            "#######", //
            "#..#..#", //
            "#..#..#", //
            "#######", //
        ],
        TILE,
    )
    .expect("valid layout")
}

#[test]
fn rejects_every_centre_whose_hitbox_touches_the_wall() {
    let grid = split_room();
    let y = 48.0;

    let mut x = 20.0;
    while x <= 210.0 {
        let left_room = x - RADIUS >= TILE && x + RADIUS < 3.0 * TILE;
        let right_room = x - RADIUS >= 4.0 * TILE && x + RADIUS < 6.0 * TILE;
        assert_eq!(
            can_occupy(Vec2::new(x, y), RADIUS, &grid),
            left_room || right_room,
            "unexpected probe result at x = {x}"
        );
        x += 0.25;
    }
}

#[test]
fn accepts_tile_centres_of_corridors() {
    let grid = split_room();
    for (column, row) in [(1, 1), (2, 2), (4, 1), (5, 2)] {
        let centre = grid.grid_to_world(maze_survival_core::GridCoord::new(column, row));
        assert!(
            can_occupy(centre, RADIUS, &grid),
            "tile ({column}, {row}) should host an actor"
        );
    }
}

#[test]
fn rejects_positions_outside_the_grid() {
    let grid = split_room();
    assert!(!can_occupy(Vec2::new(-48.0, 48.0), RADIUS, &grid));
    assert!(!can_occupy(Vec2::new(48.0, 500.0), RADIUS, &grid));
}

#[test]
fn oversized_hitbox_never_fits_a_single_tile_corridor() {
    let grid = split_room();
    let centre = grid.grid_to_world(maze_survival_core::GridCoord::new(1, 1));
    assert!(!can_occupy(centre, TILE, &grid));
}
