//! Endless Dungeon
//!
//! Main entry point: generate a dungeon, draw it, regenerate on SPACE.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context as _, anyhow};
use clap::Parser;
use crossterm::event;
use strum::VariantNames;

use ed_core::{DungeonConfig, GameRng, Generator};
use ed_tui::terminal::{self, Tui};
use ed_tui::{App, GraphicsMode, Theme, logging};

/// Procedural room-and-corridor dungeon generator
#[derive(Parser, Debug)]
#[command(name = "endless-dungeon")]
#[command(author, version, about = "Endless Dungeon - press SPACE for a new layout", long_about = None)]
struct Args {
    /// Seed for the random number generator (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON config file; command-line values override it
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Display width in pixels
    #[arg(long = "width")]
    width: Option<u32>,

    /// Display height in pixels
    #[arg(long = "height")]
    height: Option<u32>,

    /// Tile edge in pixels
    #[arg(long = "tile-size")]
    tile_size: Option<u32>,

    /// Number of room placement attempts
    #[arg(long = "max-rooms")]
    max_rooms: Option<usize>,

    /// Smallest room edge in tiles
    #[arg(long = "min-room")]
    min_room: Option<u32>,

    /// Largest room edge in tiles
    #[arg(long = "max-room")]
    max_room: Option<u32>,

    /// Glyph set: classic, fancy or auto
    #[arg(short = 'g', long = "graphics", default_value = "auto")]
    graphics: String,

    /// Use colors for a light terminal background
    #[arg(long = "light")]
    light: bool,

    /// Print one dungeon as ASCII and exit
    #[arg(long = "dump")]
    dump: bool,

    /// Write logs to this file while the UI is running
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    let config = build_config(&args)?;
    let graphics_mode = GraphicsMode::from_str(&args.graphics).map_err(|_| {
        anyhow!(
            "unknown graphics mode '{}' (expected one of {:?})",
            args.graphics,
            GraphicsMode::VARIANTS
        )
    })?;
    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);

    if args.dump {
        logging::install(logging::stderr_logger(args.verbose))?;

        let generator = Generator::new(config, rng);
        print!("{}", generator.level().grid);
        return Ok(());
    }

    // Stderr belongs to the alternate screen, so the UI only logs to a file
    if let Some(path) = &args.log_file {
        logging::install(logging::file_logger(path, args.verbose)?)?;
    }

    log::info!("starting with seed {} and {:?}", rng.seed(), config);

    let theme = if args.light { Theme::light() } else { Theme::detect() };
    let mut app = App::new(Generator::new(config, rng), theme, graphics_mode);

    let mut tui = terminal::init().context("failed to set up the terminal")?;
    let result = run(&mut tui, &mut app);
    terminal::restore(&mut tui)?;

    result
}

/// Main loop: draw, then wait up to 100ms for a key
fn run(tui: &mut Tui, app: &mut App) -> anyhow::Result<()> {
    loop {
        tui.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;

            if let Some(command) = app.handle_event(event) {
                app.execute(command);
            }

            if app.should_quit() {
                return Ok(());
            }
        }
    }
}

/// Start from the config file (or defaults) and apply command-line overrides
fn build_config(args: &Args) -> anyhow::Result<DungeonConfig> {
    let mut config = match &args.config {
        Some(path) => DungeonConfig::load_from_file(path)
            .with_context(|| format!("could not load config {}", path.display()))?,
        None => DungeonConfig::default(),
    };

    if let Some(width) = args.width {
        config.display_width = width;
    }
    if let Some(height) = args.height {
        config.display_height = height;
    }
    if let Some(tile_size) = args.tile_size {
        config.tile_size = tile_size;
    }
    if let Some(max_rooms) = args.max_rooms {
        config.max_rooms = max_rooms;
    }
    if let Some(min_room) = args.min_room {
        config.min_room_size = min_room;
    }
    if let Some(max_room) = args.max_room {
        config.max_room_size = max_room;
    }

    config.validate().context("invalid dungeon configuration")?;
    Ok(config)
}
