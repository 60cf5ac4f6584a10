mod config;
mod game;
mod grid;
mod input;
mod logger;
mod placement;
mod render;
mod snake;
mod state;
mod stones;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use config::{GameConfig, Validate};

#[derive(Parser)]
#[command(name = "snekrs-torus")]
#[command(version, about = "Snake on a wrap-around board, with stones piling up as you score")]
struct Cli {
    /// YAML config file; missing keys and a missing file fall back to defaults
    #[arg(long, default_value = "snekrs.yaml")]
    config: PathBuf,

    /// Board width in pixels of the classic layout
    #[arg(long)]
    width: Option<u32>,

    /// Board height in pixels of the classic layout
    #[arg(long)]
    height: Option<u32>,

    /// Pixels per cell
    #[arg(long)]
    cell_size: Option<u32>,

    /// Ticks per second
    #[arg(long)]
    speed: Option<u32>,

    /// Play without stones
    #[arg(long)]
    no_stones: bool,

    /// Draw the grid overlay
    #[arg(long)]
    grid: Option<bool>,

    /// Seed for apple, stone and direction randomness
    #[arg(long)]
    seed: Option<u64>,

    /// Append log records to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective config as YAML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn apply(&self, config: &mut GameConfig) {
        if let Some(width) = self.width {
            config.screen_width = width;
        }
        if let Some(height) = self.height {
            config.screen_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if self.no_stones {
            config.stones = false;
        }
        if let Some(grid) = self.grid {
            config.show_grid = grid;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::load(&cli.config)?;
    cli.apply(&mut config);
    config.validate().map_err(|e| anyhow!(e))?;

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    if let Some(path) = &config.log_file {
        logger::init_logger(path)?;
    }
    let grid = config.grid();
    log!(
        "starting on a {}x{} board at {} ticks/s, stones {}",
        grid.width,
        grid.height,
        config.speed,
        if config.stones { "on" } else { "off" }
    );

    let mut game = game::Game::new(&config, cli.seed);
    game.run()
}
