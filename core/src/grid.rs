//! Tile grid contracts shared by the generator, the collision probe, and the
//! chase controller.
//!
//! A [`MazeGrid`] is immutable once built. Carving happens on a
//! [`MazeGridBuilder`], which is consumed to produce the finished grid, so no
//! reader can ever observe a half-carved maze.

use glam::Vec2;
use thiserror::Error;

/// Continuous world-space position measured in pixels.
pub type Position = Vec2;

/// Tile that hosts the player spawn in every maze.
pub const SPAWN_TILE: GridCoord = GridCoord::new(1, 1);

/// Terrain classification of a single grid tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Open corridor that actors may traverse.
    Road,
    /// Solid maze wall.
    Wall,
    /// City block; unused by maze generation.
    Building,
    /// Decorative ground; unused by maze generation.
    Grass,
    /// Transport stop; unused by maze generation.
    Stop,
}

impl TileKind {
    const fn glyph(self) -> char {
        match self {
            Self::Road => '.',
            Self::Wall => '#',
            Self::Building => 'B',
            Self::Grass => 'G',
            Self::Stop => 'S',
        }
    }

    const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Road),
            '#' => Some(Self::Wall),
            'B' => Some(Self::Building),
            'G' => Some(Self::Grass),
            'S' => Some(Self::Stop),
            _ => None,
        }
    }
}

/// Single cell of the maze grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    kind: TileKind,
    walkable: bool,
}

impl Tile {
    /// Walkable corridor tile.
    pub const ROAD: Self = Self::of_kind(TileKind::Road);
    /// Impassable wall tile.
    pub const WALL: Self = Self::of_kind(TileKind::Wall);

    /// Creates a tile of the provided kind. Only roads are walkable.
    #[must_use]
    pub const fn of_kind(kind: TileKind) -> Self {
        Self {
            kind,
            walkable: matches!(kind, TileKind::Road),
        }
    }

    /// Terrain classification of the tile.
    #[must_use]
    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    /// Reports whether actors may stand on the tile.
    #[must_use]
    pub const fn is_walkable(&self) -> bool {
        self.walkable
    }
}

/// Integer tile index within the grid.
///
/// Components are signed so that world positions left of or above the grid
/// map to coordinates that bounds checks reject instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    column: i32,
    row: i32,
}

impl GridCoord {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Column index of the tile.
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Row index of the tile.
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Returns the coordinate shifted by the provided column and row deltas.
    #[must_use]
    pub const fn offset(self, columns: i32, rows: i32) -> Self {
        Self::new(self.column + columns, self.row + rows)
    }

    /// Straight-line distance to another tile measured in tiles.
    #[must_use]
    pub fn euclidean_distance(self, other: GridCoord) -> f32 {
        let dx = (self.column - other.column) as f32;
        let dy = (self.row - other.row) as f32;
        dx.hypot(dy)
    }
}

/// Pixel extent of the whole grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldSize {
    /// Horizontal extent in pixels.
    pub width: f32,
    /// Vertical extent in pixels.
    pub height: f32,
}

/// Errors raised while assembling a [`MazeGrid`] from explicit data.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GridError {
    /// The grid would contain no tiles.
    #[error("grid must contain at least one tile")]
    Empty,
    /// The tile edge length is zero, negative, or not finite.
    #[error("tile length must be positive and finite, got {0}")]
    InvalidTileLength(f32),
    /// The tile buffer does not match the declared dimensions.
    #[error("expected {expected} tiles but received {actual}")]
    TileCountMismatch {
        /// Tile count implied by the dimensions.
        expected: usize,
        /// Tile count actually supplied.
        actual: usize,
    },
    /// An ASCII row differs in width from the first row.
    #[error("row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },
    /// An ASCII layout contains a glyph with no tile meaning.
    #[error("unknown tile glyph {glyph:?} at column {column}, row {row}")]
    UnknownGlyph {
        /// The unrecognised character.
        glyph: char,
        /// Column of the character.
        column: usize,
        /// Row of the character.
        row: usize,
    },
}

/// Immutable tile grid describing a generated maze.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeGrid {
    columns: u32,
    rows: u32,
    tile_length: f32,
    tiles: Vec<Tile>,
}

impl MazeGrid {
    /// Builds a grid from a row-major tile buffer.
    pub fn from_tiles(
        columns: u32,
        rows: u32,
        tile_length: f32,
        tiles: Vec<Tile>,
    ) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::Empty);
        }
        if !tile_length.is_finite() || tile_length <= 0.0 {
            return Err(GridError::InvalidTileLength(tile_length));
        }

        let expected = columns as usize * rows as usize;
        if tiles.len() != expected {
            return Err(GridError::TileCountMismatch {
                expected,
                actual: tiles.len(),
            });
        }

        Ok(Self {
            columns,
            rows,
            tile_length,
            tiles,
        })
    }

    /// Parses a grid from rows of glyphs: `#` wall, `.` road, `B` building,
    /// `G` grass, `S` stop.
    pub fn from_ascii(lines: &[&str], tile_length: f32) -> Result<Self, GridError> {
        let width = lines.first().map_or(0, |line| line.chars().count());
        let mut tiles = Vec::with_capacity(width * lines.len());

        for (row, line) in lines.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }
            for (column, glyph) in line.chars().enumerate() {
                let kind = TileKind::from_glyph(glyph).ok_or(GridError::UnknownGlyph {
                    glyph,
                    column,
                    row,
                })?;
                tiles.push(Tile::of_kind(kind));
            }
        }

        let columns = u32::try_from(width).map_err(|_| GridError::Empty)?;
        let rows = u32::try_from(lines.len()).map_err(|_| GridError::Empty)?;
        Self::from_tiles(columns, rows, tile_length, tiles)
    }

    /// Renders the grid using the glyphs accepted by [`MazeGrid::from_ascii`].
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.tiles.len() + self.rows as usize);
        for row in self.tiles.chunks(self.columns as usize) {
            out.extend(row.iter().map(|tile| tile.kind().glyph()));
            out.push('\n');
        }
        out
    }

    /// Number of tile columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Edge length of a square tile in pixels.
    #[must_use]
    pub const fn tile_length(&self) -> f32 {
        self.tile_length
    }

    /// Returns the tile at the provided coordinate, or `None` outside the grid.
    #[must_use]
    pub fn tile_at(&self, coord: GridCoord) -> Option<Tile> {
        self.index(coord).map(|index| self.tiles[index])
    }

    /// Reports whether the coordinate lies inside the grid on a walkable tile.
    #[must_use]
    pub fn is_walkable(&self, coord: GridCoord) -> bool {
        self.tile_at(coord).is_some_and(|tile| tile.is_walkable())
    }

    /// Converts a tile coordinate into the world position of the tile centre.
    #[must_use]
    pub fn grid_to_world(&self, coord: GridCoord) -> Position {
        let half = self.tile_length / 2.0;
        Vec2::new(
            coord.column() as f32 * self.tile_length + half,
            coord.row() as f32 * self.tile_length + half,
        )
    }

    /// Converts a world position into the coordinate of the containing tile.
    #[must_use]
    pub fn world_to_grid(&self, position: Position) -> GridCoord {
        GridCoord::new(
            (position.x / self.tile_length).floor() as i32,
            (position.y / self.tile_length).floor() as i32,
        )
    }

    /// World position at which the player spawns: the centre of tile (1, 1).
    #[must_use]
    pub fn spawn_position(&self) -> Position {
        self.grid_to_world(SPAWN_TILE)
    }

    /// Pixel extent of the grid.
    #[must_use]
    pub fn world_size(&self) -> WorldSize {
        WorldSize {
            width: self.columns as f32 * self.tile_length,
            height: self.rows as f32 * self.tile_length,
        }
    }

    /// Iterates every tile in row-major order alongside its coordinate.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, Tile)> + '_ {
        let columns = self.columns as usize;
        self.tiles.iter().enumerate().map(move |(index, tile)| {
            let coord = GridCoord::new((index % columns) as i32, (index / columns) as i32);
            (coord, *tile)
        })
    }

    /// Number of walkable tiles in the grid.
    #[must_use]
    pub fn road_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_walkable()).count()
    }

    fn index(&self, coord: GridCoord) -> Option<usize> {
        let column = u32::try_from(coord.column()).ok()?;
        let row = u32::try_from(coord.row()).ok()?;
        if column < self.columns && row < self.rows {
            Some(row as usize * self.columns as usize + column as usize)
        } else {
            None
        }
    }
}

/// Mutable staging area used while carving a maze.
#[derive(Clone, Debug)]
pub struct MazeGridBuilder {
    columns: u32,
    rows: u32,
    tile_length: f32,
    tiles: Vec<Tile>,
}

impl MazeGridBuilder {
    /// Creates a builder with every tile set to `fill`.
    pub fn filled(
        columns: u32,
        rows: u32,
        tile_length: f32,
        fill: Tile,
    ) -> Result<Self, GridError> {
        let tiles = vec![fill; columns as usize * rows as usize];
        let MazeGrid {
            columns,
            rows,
            tile_length,
            tiles,
        } = MazeGrid::from_tiles(columns, rows, tile_length, tiles)?;
        Ok(Self {
            columns,
            rows,
            tile_length,
            tiles,
        })
    }

    /// Returns the staged tile at the coordinate, or `None` outside the grid.
    #[must_use]
    pub fn tile(&self, coord: GridCoord) -> Option<Tile> {
        self.index(coord).map(|index| self.tiles[index])
    }

    /// Overwrites the staged tile at the coordinate.
    ///
    /// Returns `false` without modifying anything when the coordinate lies
    /// outside the grid.
    pub fn set(&mut self, coord: GridCoord, tile: Tile) -> bool {
        match self.index(coord) {
            Some(index) => {
                self.tiles[index] = tile;
                true
            }
            None => false,
        }
    }

    /// Freezes the staged tiles into an immutable grid.
    #[must_use]
    pub fn build(self) -> MazeGrid {
        MazeGrid {
            columns: self.columns,
            rows: self.rows,
            tile_length: self.tile_length,
            tiles: self.tiles,
        }
    }

    fn index(&self, coord: GridCoord) -> Option<usize> {
        let column = u32::try_from(coord.column()).ok()?;
        let row = u32::try_from(coord.row()).ok()?;
        if column < self.columns && row < self.rows {
            Some(row as usize * self.columns as usize + column as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> MazeGrid {
        MazeGrid::from_ascii(&["#####", "#...#", "#.#.#", "#...#", "#####"], 32.0)
            .expect("valid layout")
    }

    #[test]
    fn tile_queries_are_bounds_checked() {
        let grid = corridor();
        assert_eq!(grid.tile_at(GridCoord::new(1, 1)), Some(Tile::ROAD));
        assert_eq!(grid.tile_at(GridCoord::new(2, 2)), Some(Tile::WALL));
        assert_eq!(grid.tile_at(GridCoord::new(-1, 0)), None);
        assert_eq!(grid.tile_at(GridCoord::new(5, 0)), None);
        assert!(!grid.is_walkable(GridCoord::new(0, -3)));
        assert!(!grid.is_walkable(GridCoord::new(2, 2)));
        assert!(grid.is_walkable(GridCoord::new(3, 3)));
    }

    #[test]
    fn grid_to_world_targets_tile_centres() {
        let grid = corridor();
        assert_eq!(grid.grid_to_world(GridCoord::new(1, 1)), Vec2::new(48.0, 48.0));
        assert_eq!(grid.spawn_position(), Vec2::new(48.0, 48.0));
    }

    #[test]
    fn world_to_grid_floors_positions() {
        let grid = corridor();
        assert_eq!(grid.world_to_grid(Vec2::new(63.9, 32.0)), GridCoord::new(1, 1));
        assert_eq!(grid.world_to_grid(Vec2::new(-0.5, 10.0)), GridCoord::new(-1, 0));
    }

    #[test]
    fn world_size_scales_with_tile_length() {
        let grid = corridor();
        assert_eq!(
            grid.world_size(),
            WorldSize {
                width: 160.0,
                height: 160.0
            }
        );
    }

    #[test]
    fn ascii_layout_survives_rendering() {
        let grid = corridor();
        assert_eq!(grid.to_ascii(), "#####\n#...#\n#.#.#\n#...#\n#####\n");
        assert_eq!(grid.road_count(), 8);
    }

    #[test]
    fn only_roads_are_walkable() {
        for kind in [TileKind::Wall, TileKind::Building, TileKind::Grass, TileKind::Stop] {
            assert!(!Tile::of_kind(kind).is_walkable(), "{kind:?} must block");
        }
        assert!(Tile::of_kind(TileKind::Road).is_walkable());
    }

    #[test]
    fn rejects_malformed_layouts() {
        assert_eq!(
            MazeGrid::from_ascii(&["###", "#."], 32.0),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
        assert!(matches!(
            MazeGrid::from_ascii(&["#x#"], 32.0),
            Err(GridError::UnknownGlyph { glyph: 'x', .. })
        ));
        assert_eq!(MazeGrid::from_ascii(&[], 32.0), Err(GridError::Empty));
        assert_eq!(
            MazeGrid::from_ascii(&["."], 0.0),
            Err(GridError::InvalidTileLength(0.0))
        );
    }

    #[test]
    fn builder_ignores_out_of_bounds_writes() {
        let mut builder = MazeGridBuilder::filled(3, 3, 16.0, Tile::WALL).expect("valid builder");
        assert!(builder.set(GridCoord::new(1, 1), Tile::ROAD));
        assert!(!builder.set(GridCoord::new(3, 1), Tile::ROAD));
        assert_eq!(builder.tile(GridCoord::new(1, 1)), Some(Tile::ROAD));

        let grid = builder.build();
        assert_eq!(grid.road_count(), 1);
    }

    #[test]
    fn builder_rejects_degenerate_dimensions() {
        assert!(matches!(
            MazeGridBuilder::filled(0, 3, 16.0, Tile::WALL),
            Err(GridError::Empty)
        ));
    }

    #[test]
    fn euclidean_distance_counts_tiles() {
        let origin = GridCoord::new(1, 1);
        assert!((origin.euclidean_distance(GridCoord::new(4, 5)) - 5.0).abs() < f32::EPSILON);
    }
}
