use std::path::PathBuf;

use clap::Parser;

use crate::config::Preset;
use crate::constants::*;

/// Auto-advancing showcase player.
#[derive(Debug, Parser)]
#[command(name = "showcase", version, about)]
pub struct Args {
    /// TOML content file with slides, headline and video panels
    #[arg(short, long, conflicts_with = "images")]
    pub content: Option<PathBuf>,

    /// Directory of images to show as slides
    #[arg(short, long)]
    pub images: Option<PathBuf>,

    /// Timing preset; overrides the one in the content file
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    pub height: i32,

    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Make every video refuse to autoplay until clicked
    #[arg(long)]
    pub block_autoplay: bool,
}
