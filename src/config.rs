// Fixed window geometry and colors, plus the few knobs exposed on the command line.

use crate::types::Rgb;
use clap::Parser;

pub const WIDTH: u32 = 640;
pub const HEIGHT: u32 = 320;
pub const TARGET_FPS: usize = 60;

/// Canvas fill; the erasers paint with this color.
pub const BG_COLOR: Rgb = Rgb(89, 99, 255);
pub const BRUSH_COLOR: Rgb = Rgb(0, 0, 0);

pub const DEFAULT_BRUSH_RADIUS: u32 = 8;
pub const DEFAULT_ERASER_RADIUS: u32 = 12;
/// Upper bound for either radius; keeps `3 * eraser` and `2 * brush` well inside `u32`.
pub const MAX_RADIUS: u32 = 1000;
pub const DEFAULT_TITLE: &str = "My Game";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "sketchpad")]
#[command(version, about = "Paint and erase on a small demo canvas with the mouse")]
pub struct Config {
    /// Brush radius in pixels (left button)
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_BRUSH_RADIUS,
          value_parser = clap::value_parser!(u32).range(1..=MAX_RADIUS as i64))]
    pub brush_radius: u32,

    /// Small eraser radius in pixels (right button); the middle button erases at 3x this
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_ERASER_RADIUS,
          value_parser = clap::value_parser!(u32).range(1..=MAX_RADIUS as i64))]
    pub eraser_radius: u32,

    /// Window title
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Start from a blank canvas instead of the demo shapes
    #[arg(long)]
    pub no_demo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brush_radius: DEFAULT_BRUSH_RADIUS,
            eraser_radius: DEFAULT_ERASER_RADIUS,
            title: DEFAULT_TITLE.to_string(),
            no_demo: false,
        }
    }
}
