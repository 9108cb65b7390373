//! Minimal log-scale line plots drawn with macroquad.

use macroquad::prelude::*;

use crate::growth::Series;

/// How values along one axis are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log10,
}

impl Scale {
    fn transform(self, v: f64) -> Option<f64> {
        match self {
            Scale::Linear => Some(v),
            Scale::Log10 if v > 0.0 => Some(v.log10()),
            Scale::Log10 => None,
        }
    }
}

/// One plot axis: a data range and its scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    /// Data value at the start of the axis.
    pub min: f64,
    /// Data value at the end of the axis.
    pub max: f64,
    pub scale: Scale,
}

impl Axis {
    /// Creates a linear axis over `[min, max]`.
    pub fn linear(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            scale: Scale::Linear,
        }
    }

    /// Creates a base-10 logarithmic axis over `[min, max]`; both ends must
    /// be positive.
    pub fn log(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            scale: Scale::Log10,
        }
    }

    /// Maps `v` to `[0, 1]` along the axis, or `None` if it has no position
    /// (non-positive on a log axis, or a zero-width axis).
    pub fn fraction(&self, v: f64) -> Option<f64> {
        let lo = self.scale.transform(self.min)?;
        let hi = self.scale.transform(self.max)?;
        let v = self.scale.transform(v)?;
        if hi == lo {
            return None;
        }
        Some((v - lo) / (hi - lo))
    }
}

/// Screen rectangle plus the two axes drawn inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    /// Plot area in screen pixels.
    pub rect: Rect,
    pub x: Axis,
    pub y: Axis,
}

impl Plot {
    /// Creates a plot drawing `x` and `y` inside `rect`.
    pub fn new(rect: Rect, x: Axis, y: Axis) -> Self {
        Self { rect, x, y }
    }

    /// Converts a data point to screen coordinates (y grows downwards).
    pub fn to_screen(&self, x: f64, y: f64) -> Option<Vec2> {
        let fx = self.x.fraction(x)?;
        let fy = self.y.fraction(y)?;
        Some(vec2(
            self.rect.x + fx as f32 * self.rect.w,
            self.rect.y + (1.0 - fy as f32) * self.rect.h,
        ))
    }

    /// Draws the frame, axis labels and title.
    pub fn draw_frame(&self, title: &str, x_label: &str, y_label: &str) {
        let r = self.rect;
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, DARKGRAY);
        draw_text(title, r.x, r.y - 12.0, 22.0, BLACK);
        draw_text(x_label, r.x + r.w / 2.0 - 80.0, r.y + r.h + 36.0, 18.0, BLACK);
        draw_text(y_label, 8.0, r.y + r.h / 2.0, 18.0, BLACK);
    }

    /// Labels decades along a log x axis.
    pub fn draw_decade_ticks_x(&self) {
        if self.x.scale != Scale::Log10 {
            return;
        }
        let first = self.x.min.log10().ceil() as i32;
        let last = self.x.max.log10().floor() as i32;
        for e in first..=last {
            if let Some(fx) = self.x.fraction(10f64.powi(e)) {
                let x = self.rect.x + fx as f32 * self.rect.w;
                let bottom = self.rect.y + self.rect.h;
                draw_line(x, bottom, x, bottom + 5.0, 1.0, DARKGRAY);
                draw_text(&format!("1e{e}"), x - 10.0, bottom + 18.0, 14.0, DARKGRAY);
            }
        }
    }

    /// Draws `ticks` evenly spaced labels on a linear y axis.
    pub fn draw_ticks_y<F>(&self, ticks: usize, format: F)
    where
        F: Fn(f64) -> String,
    {
        if ticks < 2 {
            return;
        }
        for i in 0..ticks {
            let v = self.y.min + (self.y.max - self.y.min) * i as f64 / (ticks - 1) as f64;
            if let Some(fy) = self.y.fraction(v) {
                let y = self.rect.y + (1.0 - fy as f32) * self.rect.h;
                draw_line(self.rect.x - 5.0, y, self.rect.x, y, 1.0, DARKGRAY);
                draw_text(&format(v), self.rect.x - 70.0, y + 4.0, 14.0, DARKGRAY);
            }
        }
    }

    /// Draws a series as a polyline, skipping points with no position.
    pub fn draw_series(&self, series: &Series, color: Color) {
        let mut prev: Option<Vec2> = None;
        for &(x, y) in &series.points {
            let p = self.to_screen(x, y);
            if let (Some(a), Some(b)) = (prev, p) {
                draw_line(a.x, a.y, b.x, b.y, 2.0, color);
            }
            prev = p;
        }
    }

    /// Draws a legend box in the top-left corner of the plot.
    pub fn draw_legend(&self, entries: &[(&str, Color)]) {
        let x = self.rect.x + 10.0;
        let mut y = self.rect.y + 20.0;
        for (label, color) in entries {
            draw_line(x, y - 4.0, x + 20.0, y - 4.0, 3.0, *color);
            draw_text(label, x + 26.0, y, 16.0, BLACK);
            y += 18.0;
        }
    }
}

/// Distinct line colors, cycled by series index.
pub const PALETTE: [Color; 10] = [
    Color::new(0.12, 0.47, 0.71, 1.0),
    Color::new(1.00, 0.50, 0.05, 1.0),
    Color::new(0.17, 0.63, 0.17, 1.0),
    Color::new(0.84, 0.15, 0.16, 1.0),
    Color::new(0.58, 0.40, 0.74, 1.0),
    Color::new(0.55, 0.34, 0.29, 1.0),
    Color::new(0.89, 0.47, 0.76, 1.0),
    Color::new(0.50, 0.50, 0.50, 1.0),
    Color::new(0.74, 0.74, 0.13, 1.0),
    Color::new(0.09, 0.75, 0.81, 1.0),
];
