//! Command-line configuration for the viewers.

use std::fmt;
use std::str::FromStr;

use clap::Args;
use macroquad::color::Color;
use thiserror::Error;

/// An opaque RGB color as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Why a color argument could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Neither a known name nor six characters after an optional `#`.
    #[error("expected #rrggbb or a color name, got {0:?}")]
    Malformed(String),

    /// Right shape, but the digits are not hexadecimal.
    #[error("invalid hex digits in {0:?}")]
    InvalidHex(String),
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Parses `#rrggbb`, `rrggbb`, or one of `white`, `black`, `red`,
    /// `green`, `blue`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "white" => return Ok(Rgb::WHITE),
            "black" => return Ok(Rgb::BLACK),
            "red" => return Ok(Rgb::RED),
            "green" => return Ok(Rgb::GREEN),
            "blue" => return Ok(Rgb::BLUE),
            _ => {}
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::Malformed(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidHex(s.to_string()))
        };
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Flags shared by the Sierpinski viewers.
///
/// Every flag is optional; unset flags keep the viewer's preset value.
#[derive(Args, Debug, Clone, Default)]
pub struct SceneArgs {
    /// Recursion depth (0 draws the outer triangle only)
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Window width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Fill color of the leaf triangles (#rrggbb or name)
    #[arg(long, value_name = "COLOR")]
    pub fill: Option<Rgb>,

    /// Background color (#rrggbb or name)
    #[arg(long, value_name = "COLOR")]
    pub background: Option<Rgb>,
}
