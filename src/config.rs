// Command-line configuration for the sketchpad window.
//
// Usage examples:
//   sketchpad
//   sketchpad --width 1024 --height 768 --radius 6
//   sketchpad --background 202020 --color ffcc00 --restore-delay-ms 250

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use clap::Parser;

use crate::error::Error;
use crate::types::Rgba;

/// Freehand raster sketchpad.
///
/// Hold the left mouse button to paint. 1-8 pick colors, E toggles the
/// eraser, Z or Backspace undoes the last stroke, the mouse wheel or [ / ]
/// change the brush size, Esc quits.
#[derive(Parser, Debug, Clone)]
#[command(name = "sketchpad", about = "Freehand raster sketchpad")]
pub struct Config {
    /// Canvas and window width in pixels.
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Canvas and window height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Initial brush radius in pixels (0 paints single pixels).
    #[arg(short, long, default_value_t = 4)]
    pub radius: u32,

    /// Largest brush radius reachable with the wheel or bracket keys.
    #[arg(long, default_value_t = 64)]
    pub max_radius: u32,

    /// Background color as RRGGBB or RRGGBBAA. The eraser paints with it.
    #[arg(long, default_value = "FFFFFF", value_name = "HEX")]
    pub background: String,

    /// Initial paint color as RRGGBB or RRGGBBAA.
    #[arg(long, default_value = "000000", value_name = "HEX")]
    pub color: String,

    /// How long the brush-size cue lingers after adjusting stops.
    #[arg(long, default_value_t = 500, value_name = "MS")]
    pub restore_delay_ms: u64,

    /// Window title.
    #[arg(long, default_value = "Sketchpad")]
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            radius: 4,
            max_radius: 64,
            background: "FFFFFF".into(),
            color: "000000".into(),
            restore_delay_ms: 500,
            title: "Sketchpad".into(),
        }
    }
}

impl Config {
    /// Reject values the window cannot work with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "canvas size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.radius > self.max_radius {
            return Err(Error::Config(format!(
                "radius {} exceeds max radius {}",
                self.radius, self.max_radius
            )));
        }
        self.background_color()?;
        self.paint_color()?;
        Ok(())
    }

    pub fn background_color(&self) -> Result<Rgba, Error> {
        parse_color("background", &self.background)
    }

    pub fn paint_color(&self) -> Result<Rgba, Error> {
        parse_color("color", &self.color)
    }

    pub fn restore_delay(&self) -> Duration {
        Duration::from_millis(self.restore_delay_ms)
    }
}

fn parse_color(name: &str, value: &str) -> Result<Rgba, Error> {
    Rgba::from_hex(value).ok_or_else(|| Error::Config(format!("--{name}: not a hex color: {value:?}")))
}
