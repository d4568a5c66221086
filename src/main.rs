//! # dungeon-board
//!
//! Command line driver for the board layout library. Lays out either a
//! procedurally generated board or a `day<N>` level file and prints the
//! result as text, or as JSON placements with `--json`.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for the details
//! of each generation pass.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use dungeon_board::{BoardConfig, BoardDocument, DirectoryLevelSource, Scene};

/// Lay out tile-based dungeon boards
#[derive(Parser, Debug)]
#[command(name = "dungeon-board")]
#[command(version, about = "Lay out tile-based dungeon boards", long_about = None)]
struct Args {
    /// Board config (JSON); defaults to the classic 8x8 board
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible layouts
    #[arg(short = 's', long = "seed", global = true)]
    seed: Option<u64>,

    /// Print placements as JSON instead of a text picture
    #[arg(long = "json", global = true)]
    json: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Generate a random board
    Random {
        /// Override the config's column count
        #[arg(long)]
        columns: Option<u32>,

        /// Override the config's row count
        #[arg(long)]
        rows: Option<u32>,
    },
    /// Lay out a level file
    Level {
        /// Level number; reads day<LEVEL>.txt
        level: u32,

        /// Directory holding the level files
        #[arg(short = 'd', long = "levels-dir", default_value = "levels")]
        levels_dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    info!("dungeon-board starting...");

    let mut config = match &args.config {
        Some(path) => BoardConfig::from_json_file(path)?,
        None => BoardConfig::default(),
    };

    let mut doc = BoardDocument::new();
    match args.mode {
        Mode::Random { columns, rows } => {
            if let Some(columns) = columns {
                config.columns = columns;
            }
            if let Some(rows) = rows {
                config.rows = rows;
            }
            let mut scene = new_scene(config, DirectoryLevelSource::new("."), args.seed);
            let stats = scene.setup_random_board(&mut doc)?;
            doc.set_source_name("random");
            info!(
                "Placed {} walls and {} food",
                stats.wall_count, stats.food_count
            );
        }
        Mode::Level { level, levels_dir } => {
            let mut scene = new_scene(config, DirectoryLevelSource::new(levels_dir), args.seed);
            scene.setup_scene(level, &mut doc)?;
            doc.set_source_name(dungeon_board::level::level_name(level));
        }
    }

    if args.json {
        println!("{}", doc.to_json()?);
    } else {
        print!("{}", doc.render_ascii());
    }
    info!("dungeon-board exiting.");
    Ok(())
}

fn new_scene(
    config: BoardConfig,
    levels: DirectoryLevelSource,
    seed: Option<u64>,
) -> Scene<DirectoryLevelSource> {
    let scene = Scene::new(config, levels);
    match seed {
        Some(seed) => scene.with_seed(seed),
        None => scene,
    }
}
