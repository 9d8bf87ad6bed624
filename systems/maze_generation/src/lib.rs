#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Randomised backtracking maze generator.
//!
//! Passages live on the odd-coordinate lattice and the generator moves in
//! steps of two tiles, opening the wall tile between the current cell and the
//! neighbour it carves into. The result is a perfect maze: walls are exactly
//! one tile thick, the outer border stays solid, and every pair of road tiles
//! is joined by exactly one path.
//!
//! Carving runs on an explicit stack of frames rather than the call stack, so
//! the depth of the search is bounded only by memory. Each frame shuffles its
//! four directions once, on entry, and resumes where it left off after a
//! child returns; this visits cells in the same order a recursive carve would.

use maze_survival_core::{
    ConfigError, GridCoord, MazeConfig, MazeGrid, MazeGridBuilder, Tile, TileKind, SPAWN_TILE,
};
use rand::{seq::SliceRandom, Rng};
use tracing::debug;

/// Two-tile carving steps: up, down, left, right.
const CARVE_STEPS: [(i32, i32); 4] = [(0, -2), (0, 2), (-2, 0), (2, 0)];

/// Pure system that carves fresh mazes of a fixed size.
#[derive(Clone, Debug)]
pub struct MazeGenerator {
    blank: MazeGridBuilder,
    columns: u32,
    rows: u32,
}

impl MazeGenerator {
    /// Creates a generator for the configured dimensions.
    ///
    /// Even or undersized dimensions are rejected up front: the step-2
    /// lattice only lines up with a one-tile border when both edges are odd.
    pub fn new(config: &MazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let blank =
            MazeGridBuilder::filled(config.columns, config.rows, config.tile_length, Tile::WALL)?;
        Ok(Self {
            blank,
            columns: config.columns,
            rows: config.rows,
        })
    }

    /// Number of tile columns in generated mazes.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows in generated mazes.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Carves a new maze starting from the spawn tile.
    pub fn generate<R>(&self, rng: &mut R) -> MazeGrid
    where
        R: Rng + ?Sized,
    {
        let mut builder = self.blank.clone();
        let _ = builder.set(SPAWN_TILE, Tile::ROAD);

        let mut stack = vec![CarveFrame::enter(SPAWN_TILE, rng)];
        while let Some(frame) = stack.last_mut() {
            let Some((dx, dy)) = frame.next_step() else {
                let _ = stack.pop();
                continue;
            };

            let cell = frame.cell;
            let neighbour = cell.offset(dx, dy);
            if !self.is_interior(neighbour) || !is_wall(&builder, neighbour) {
                continue;
            }

            let _ = builder.set(cell.offset(dx / 2, dy / 2), Tile::ROAD);
            let _ = builder.set(neighbour, Tile::ROAD);
            stack.push(CarveFrame::enter(neighbour, rng));
        }

        let grid = builder.build();
        debug!(
            columns = self.columns,
            rows = self.rows,
            roads = grid.road_count(),
            "carved maze"
        );
        grid
    }

    fn is_interior(&self, coord: GridCoord) -> bool {
        let inside = |value: i32, edge: u32| value > 0 && i64::from(value) < i64::from(edge) - 1;
        inside(coord.column(), self.columns) && inside(coord.row(), self.rows)
    }
}

fn is_wall(builder: &MazeGridBuilder, coord: GridCoord) -> bool {
    builder
        .tile(coord)
        .is_some_and(|tile| tile.kind() == TileKind::Wall)
}

/// Pending work for one lattice cell: its shuffled directions and how many
/// of them have been tried.
#[derive(Debug)]
struct CarveFrame {
    cell: GridCoord,
    steps: [(i32, i32); 4],
    tried: usize,
}

impl CarveFrame {
    fn enter<R>(cell: GridCoord, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut steps = CARVE_STEPS;
        steps.shuffle(rng);
        Self {
            cell,
            steps,
            tried: 0,
        }
    }

    fn next_step(&mut self) -> Option<(i32, i32)> {
        let step = self.steps.get(self.tried).copied()?;
        self.tried += 1;
        Some(step)
    }
}
