#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Collision probe shared by every actor that moves through the maze.
//!
//! Actors are approximated by an axis-aligned square hitbox whose half-width
//! is the actor radius. A position is legal when all four hitbox corners fall
//! inside walkable tiles. The probe is a point test, not a sweep: a fast
//! enough actor could skip a one-tile wall in a single tick, which the chase
//! and walk speeds used by the game never reach.

use glam::Vec2;
use maze_survival_core::{MazeGrid, Position};

/// Corners of the square hitbox centred on `center`, in the order top-left,
/// top-right, bottom-left, bottom-right.
#[must_use]
pub fn hitbox_corners(center: Position, radius: f32) -> [Position; 4] {
    [
        center + Vec2::new(-radius, -radius),
        center + Vec2::new(radius, -radius),
        center + Vec2::new(-radius, radius),
        center + Vec2::new(radius, radius),
    ]
}

/// Reports whether an actor of the given radius may stand at `center`.
///
/// Without a grid nothing is walkable, so the probe answers `false` rather
/// than letting an actor move through an unknown maze.
#[must_use]
pub fn can_occupy<'grid>(
    center: Position,
    radius: f32,
    grid: impl Into<Option<&'grid MazeGrid>>,
) -> bool {
    let Some(grid) = grid.into() else {
        return false;
    };

    hitbox_corners(center, radius)
        .into_iter()
        .all(|corner| grid.is_walkable(grid.world_to_grid(corner)))
}

/// Circle-circle overlap test used for catches.
///
/// Touching circles do not overlap; the distance must be strictly smaller
/// than the sum of the radii.
#[must_use]
pub fn circles_overlap(a: Position, a_radius: f32, b: Position, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_surround_centre() {
        let corners = hitbox_corners(Vec2::new(50.0, 40.0), 10.0);
        assert_eq!(
            corners,
            [
                Vec2::new(40.0, 30.0),
                Vec2::new(60.0, 30.0),
                Vec2::new(40.0, 50.0),
                Vec2::new(60.0, 50.0),
            ]
        );
    }

    #[test]
    fn missing_grid_blocks_movement() {
        assert!(!can_occupy(Vec2::new(48.0, 48.0), 10.0, None::<&MazeGrid>));
    }

    #[test]
    fn touching_circles_do_not_overlap() {
        assert!(!circles_overlap(Vec2::ZERO, 10.0, Vec2::new(22.0, 0.0), 12.0));
        assert!(circles_overlap(Vec2::ZERO, 10.0, Vec2::new(21.9, 0.0), 12.0));
    }
}
