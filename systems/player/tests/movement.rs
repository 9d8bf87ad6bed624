use std::time::Duration;

use glam::Vec2;
use maze_survival_core::{
    Event, Facing, MazeGrid, PlayerConfig, PlayerInput, PlayerMotion, StaminaConfig,
};
use maze_survival_system_player::Player;

const TENTH: Duration = Duration::from_millis(100);

fn layout(rows: &[&str]) -> MazeGrid {
    MazeGrid::from_ascii(rows, 32.0).expect("valid layout")
}

fn player_at(position: Vec2) -> Player {
    Player::spawn(position, PlayerConfig::default(), StaminaConfig::default())
}

fn approx(actual: Vec2, expected: Vec2) -> bool {
    (actual - expected).length() < 1e-3
}

#[test]
fn idle_player_stays_put_and_recovers() {
    let grid = layout(&["#####", "#...#", "#####"]);
    let mut player = player_at(Vec2::new(48.0, 48.0));
    let mut events = Vec::new();

    player.update(TENTH, PlayerInput::default(), &grid, &mut events);

    assert_eq!(player.position(), Vec2::new(48.0, 48.0));
    assert_eq!(player.motion(), PlayerMotion::Idle);
    assert_eq!(player.stamina().current(), 100.0);
    assert!(events.is_empty());
}

#[test]
fn walking_moves_at_walk_speed() {
    let grid = layout(&["#######", "#.....#", "#######"]);
    let mut player = player_at(Vec2::new(48.0, 48.0));
    let input = PlayerInput {
        right: true,
        ..PlayerInput::default()
    };

    player.update(TENTH, input, &grid, &mut Vec::new());

    assert!(approx(player.position(), Vec2::new(58.0, 48.0)));
    assert_eq!(player.motion(), PlayerMotion::Walking);
    assert_eq!(player.facing(), Facing::Right);
    assert!(player.stamina().current() < 100.0);
}

#[test]
fn walls_block_movement() {
    let grid = layout(&["###", "#.#", "###"]);
    let mut player = player_at(Vec2::new(48.0, 48.0));
    let input = PlayerInput {
        left: true,
        run: true,
        ..PlayerInput::default()
    };

    player.update(TENTH, input, &grid, &mut Vec::new());

    assert_eq!(player.position(), Vec2::new(48.0, 48.0));
    assert_eq!(player.facing(), Facing::Left);
}

#[test]
fn diagonal_input_slides_along_walls() {
    let grid = layout(&["#####", "#...#", "#####"]);
    let mut player = player_at(Vec2::new(48.0, 48.0));
    let input = PlayerInput {
        right: true,
        down: true,
        ..PlayerInput::default()
    };

    player.update(TENTH, input, &grid, &mut Vec::new());

    let step = 100.0 * std::f32::consts::FRAC_1_SQRT_2 * 0.1;
    assert!(
        approx(player.position(), Vec2::new(48.0 + step, 48.0)),
        "expected a horizontal slide, got {:?}",
        player.position()
    );
}

#[test]
fn movement_is_clamped_to_world_bounds() {
    let grid = layout(&["....", "...."]);
    let mut player = player_at(Vec2::new(16.0, 16.0));
    let input = PlayerInput {
        left: true,
        up: true,
        ..PlayerInput::default()
    };

    player.update(Duration::from_secs(1), input, &grid, &mut Vec::new());

    assert_eq!(player.position(), Vec2::new(10.0, 10.0));
}

#[test]
fn exhausted_player_cannot_run() {
    let grid = layout(&["#######", "#.....#", "#.....#", "#######"]);
    let config = PlayerConfig {
        max_stamina: 3.0,
        ..PlayerConfig::default()
    };
    let mut player = Player::spawn(Vec2::new(48.0, 48.0), config, StaminaConfig::default());
    let sprint = PlayerInput {
        right: true,
        run: true,
        ..PlayerInput::default()
    };
    let mut events = Vec::new();

    player.update(Duration::from_secs(1), sprint, &grid, &mut events);
    assert_eq!(player.motion(), PlayerMotion::Running);
    assert_eq!(events, vec![Event::PlayerExhausted]);
    assert!(player.snapshot().exhausted);

    events.clear();
    player.update(TENTH, sprint, &grid, &mut events);
    assert_eq!(player.motion(), PlayerMotion::Walking);
    assert!(
        approx(player.velocity(), Vec2::new(50.0, 0.0)),
        "exhausted walk should be halved, got {:?}",
        player.velocity()
    );
    assert!(events.is_empty());
}

#[test]
fn snapshot_reports_radii_and_stamina() {
    let player = player_at(Vec2::new(48.0, 48.0));
    let snapshot = player.snapshot();
    assert_eq!(snapshot.hitbox_radius, 10.0);
    assert_eq!(snapshot.catch_radius, 12.0);
    assert_eq!(snapshot.stamina, snapshot.max_stamina);
    assert_eq!(snapshot.facing, Facing::Down);
}
