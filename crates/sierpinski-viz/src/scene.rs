//! Scene presets for the Sierpinski viewers.

use macroquad::window::Conf;
use sierpinski::{Point, Triangle};

use crate::config::{Rgb, SceneArgs};

/// Which demo layout a scene follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// 800x600 window, apex at the top center, 100px margins.
    Window,
    /// 400x400 canvas, 10px margins.
    Canvas,
}

/// Everything a viewer needs to draw one gasket.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Preset the layout was derived from.
    pub preset: Preset,
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Recursion depth; validated when the scene is subdivided.
    pub depth: i64,
    /// Leaf fill color.
    pub fill: Rgb,
    /// Clear color behind the gasket.
    pub background: Rgb,
}

impl Scene {
    /// Creates a scene with the preset's default size, depth and colors.
    pub fn new(preset: Preset) -> Self {
        match preset {
            Preset::Window => Self {
                preset,
                width: 800,
                height: 600,
                depth: 5,
                fill: Rgb::BLUE,
                background: Rgb::WHITE,
            },
            Preset::Canvas => Self {
                preset,
                width: 400,
                height: 400,
                depth: 4,
                fill: Rgb::RED,
                background: Rgb::WHITE,
            },
        }
    }

    /// Overrides preset values with whatever flags were given.
    pub fn with_args(mut self, args: &SceneArgs) -> Self {
        if let Some(depth) = args.depth {
            self.depth = depth;
        }
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        if let Some(fill) = args.fill {
            self.fill = fill;
        }
        if let Some(background) = args.background {
            self.background = background;
        }
        self
    }

    /// Sets the recursion depth.
    pub fn with_depth(mut self, depth: i64) -> Self {
        self.depth = depth;
        self
    }

    /// Returns the outer triangle in screen pixels (origin top-left, y down).
    pub fn triangle(&self) -> Triangle {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        match self.preset {
            Preset::Window => Triangle::new(
                Point::new(w / 2.0, 100.0),
                Point::new(100.0, h - 100.0),
                Point::new(w - 100.0, h - 100.0),
            ),
            Preset::Canvas => Triangle::new(
                Point::new(10.0, h - 10.0),
                Point::new(w - 10.0, h - 10.0),
                Point::new(w / 2.0, 10.0),
            ),
        }
    }

    /// Subdivides the scene triangle at the configured depth.
    pub fn leaves(&self) -> sierpinski::Result<Vec<Triangle>> {
        sierpinski::subdivide_par(&self.triangle(), self.depth)
    }

    /// Builds the macroquad window configuration for this scene.
    pub fn window_conf(&self, title: &str) -> Conf {
        Conf {
            window_title: title.to_string(),
            window_width: i32::try_from(self.width).unwrap_or(i32::MAX),
            window_height: i32::try_from(self.height).unwrap_or(i32::MAX),
            ..Default::default()
        }
    }
}
