use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::grid::GridSize;

/// Largest board side, in cells, that still fits terminal coordinates.
pub const MAX_GRID_SIDE: u16 = 1000;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const GRAY: Rgb = Rgb::new(105, 105, 105);
pub const SLATEGRAY: Rgb = Rgb::new(112, 128, 144);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Colours used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub grid: Rgb,
    pub apple: Rgb,
    pub snake: Rgb,
    pub stone: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BLACK,
            grid: SLATEGRAY,
            apple: RED,
            snake: GREEN,
            stone: GRAY,
            text: WHITE,
        }
    }
}

/// Everything tunable about a game. Missing YAML keys fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in pixels of the classic layout
    pub screen_width: u32,
    /// Board height in pixels of the classic layout
    pub screen_height: u32,
    /// Pixels per cell; the board is `screen / cell_size` cells wide
    pub cell_size: u32,
    /// Ticks per second
    pub speed: u32,
    /// Whether stones appear as the score grows
    pub stones: bool,
    /// A stone appears at every multiple of this score
    pub stone_interval: u32,
    pub show_grid: bool,
    pub show_score: bool,
    /// Where log records go; logging is off without one
    pub log_file: Option<PathBuf>,
    pub colors: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            speed: 20,
            stones: true,
            stone_interval: 5,
            show_grid: true,
            show_score: true,
            log_file: None,
            colors: Palette::default(),
        }
    }
}

impl GameConfig {
    pub fn grid(&self) -> GridSize {
        GridSize::from_screen(self.screen_width, self.screen_height, self.cell_size)
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }

    /// Reads a YAML config. A file that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read config file {}", path.display()))
            }
        };
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: GameConfig =
            serde_yaml_ng::from_str(content).context("Failed to deserialize config")?;
        config.validate().map_err(|e| anyhow!(e))?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).context("Failed to serialize config")
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cell_size must be greater than 0".to_string());
        }
        if self.speed == 0 {
            return Err("speed must be greater than 0".to_string());
        }
        if self.stone_interval == 0 {
            return Err("stone_interval must be greater than 0".to_string());
        }
        let grid = self.grid();
        if grid.width < 2 || grid.height < 2 {
            return Err(format!(
                "board of {}x{} pixels with cell_size {} is smaller than 2x2 cells",
                self.screen_width, self.screen_height, self.cell_size
            ));
        }
        if grid.width > MAX_GRID_SIDE || grid.height > MAX_GRID_SIDE {
            return Err(format!(
                "board of {}x{} cells is larger than {}x{} cells",
                grid.width, grid.height, MAX_GRID_SIDE, MAX_GRID_SIDE
            ));
        }
        Ok(())
    }
}
