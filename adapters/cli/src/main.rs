#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs Maze Survival headless.

mod autopilot;
mod config;
mod render;
mod timestep;

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use maze_survival_core::{Command, Event, GameConfig};
use maze_survival_world::{apply, query, World};
use tracing::trace;
use tracing_subscriber::EnvFilter;

use autopilot::Autopilot;
use timestep::{FixedTimestep, MAX_TICKS_PER_FRAME, TICK};

/// Command-line arguments accepted by the `maze-survival` binary.
#[derive(Debug, Parser)]
#[command(author, version, about = "Survive a procedurally generated maze", long_about = None)]
struct Cli {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[arg(long, global = true, default_value = "info")]
    log_filter: String,

    #[command(subcommand)]
    command: Mode,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Generates a maze and prints it.
    Maze(MazeArgs),
    /// Plays a full session with a scripted player.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct MazeArgs {
    /// Seed for the maze generator; drawn at random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of tile columns, odd and at least 5.
    #[arg(long, default_value_t = 21)]
    columns: u32,

    /// Number of tile rows, odd and at least 5.
    #[arg(long, default_value_t = 21)]
    rows: u32,
}

#[derive(Debug, Args)]
struct RunArgs {
    /// TOML file with game settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed overriding the one in the config file.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Input policy steering the player.
    #[arg(long, value_enum, default_value_t = Autopilot::Flee)]
    autopilot: Autopilot,

    /// Simulated wall-clock length of one frame in milliseconds.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Frames to simulate before giving up on the session.
    #[arg(long, default_value_t = 7_200)]
    max_frames: u64,

    /// Prints the board before and after the session.
    #[arg(long, default_value_t = false)]
    render: bool,
}

/// Entry point for the Maze Survival command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_filter);

    match cli.command {
        Mode::Maze(args) => print_maze(args),
        Mode::Run(args) => run_session(args),
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_maze(args: MazeArgs) -> Result<()> {
    let mut config = GameConfig {
        seed: args.seed,
        ..GameConfig::default()
    };
    config.maze.columns = args.columns;
    config.maze.rows = args.rows;

    let world = World::new(config).context("invalid maze dimensions")?;
    print!("{}", query::grid(&world).to_ascii());
    println!("seed {}", query::seed(&world));
    Ok(())
}

fn run_session(args: RunArgs) -> Result<()> {
    let mut config = config::load(args.config.as_deref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut world = World::new(config).context("invalid game configuration")?;
    println!("{}", query::welcome_banner(&world));
    if args.render {
        print!("{}", render::render(&world));
    }

    let frame = Duration::from_millis(args.frame_ms);
    let mut timestep = FixedTimestep::new(TICK, MAX_TICKS_PER_FRAME);
    let mut events = Vec::new();

    'frames: for _ in 0..args.max_frames {
        for _ in 0..timestep.advance(frame) {
            let input = args.autopilot.input(&world);
            apply(
                &mut world,
                Command::Tick {
                    dt: timestep.step(),
                    input,
                },
                &mut events,
            );
            for event in events.drain(..) {
                trace!(?event, "world event");
                if matches!(event, Event::StatusChanged { .. }) {
                    break 'frames;
                }
            }
        }
    }

    if args.render {
        print!("{}", render::render(&world));
    }
    let survival = query::survival(&world);
    println!(
        "{:?} after {:.2}s of {:.0}s (seed {})",
        survival.status,
        survival.survival_time.as_secs_f32(),
        survival.target_time.as_secs_f32(),
        query::seed(&world)
    );
    Ok(())
}
