//! Command-line configuration for the game window.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::difficulty::Difficulty;
use crate::engine::{DEFAULT_BOARD_PIXELS, DEFAULT_TILE_COUNT, EngineConfig};
use crate::store::DEFAULT_SAVE_FILE;

#[derive(Debug, Clone, Parser)]
#[command(name = "snake", version, about = "Grid snake arcade game")]
pub struct Config {
    /// Difficulty preset: easy, normal or hard. Unrecognised names fall back to normal.
    #[arg(long, default_value = "normal")]
    pub difficulty: String,

    /// URL-style query such as `?difficulty=hard`; takes precedence over --difficulty.
    #[arg(long)]
    pub query: Option<String>,

    /// JSON file holding the best score for each difficulty.
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    pub save_file: PathBuf,

    /// Board edge length in pixels.
    #[arg(long, default_value_t = DEFAULT_BOARD_PIXELS, value_parser = parse_board_size)]
    pub board_size: f32,

    /// Number of cells along each board edge.
    #[arg(long, default_value_t = DEFAULT_TILE_COUNT, value_parser = clap::value_parser!(i32).range(5..=64))]
    pub tiles: i32,

    /// Show the on-screen direction pad.
    #[arg(long)]
    pub touch: bool,

    /// Never place food on a cell the snake occupies.
    #[arg(long)]
    pub disjoint_food: bool,

    /// Seed for reproducible food placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the log to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_board_size(value: &str) -> Result<f32, String> {
    let size: f32 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !(100.0..=4096.0).contains(&size) {
        return Err(format!("board size must be between 100 and 4096 pixels, got {size}"));
    }
    Ok(size)
}

impl Config {
    pub fn difficulty(&self) -> Difficulty {
        match &self.query {
            Some(query) => Difficulty::from_query(query),
            None => Difficulty::parse_lenient(&self.difficulty),
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            board_pixel_size: self.board_size,
            tile_count: self.tiles,
            is_touch_capable: self.touch || cfg!(any(target_os = "android", target_os = "ios")),
            food_avoids_snake: self.disjoint_food,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
