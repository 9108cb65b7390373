//! Macroquad viewers for Sierpinski subdivision and growth-function plots.

use macroquad::color::Color;
use macroquad::input::{is_key_pressed, KeyCode};
use macroquad::math::{vec2, Vec2};
use macroquad::shapes::draw_triangle;
use macroquad::window::{clear_background, next_frame};
use sierpinski::{Point, RenderVisitor, Triangle, TriangleRenderer, TriangleVisitor};
use tracing::info;

pub mod config;
pub mod growth;
pub mod plot;
pub mod scene;

pub use config::{ColorParseError, Rgb, SceneArgs};
pub use scene::{Preset, Scene};

/// Renders triangles with macroquad's immediate-mode drawing.
///
/// Vertex coordinates are used as screen pixels: origin top-left, y down.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacroquadRenderer;

impl TriangleRenderer for MacroquadRenderer {
    type Color = Color;

    fn fill(&mut self, triangle: &Triangle, color: &Color) {
        let [a, b, c] = triangle.vertices().map(to_screen);
        draw_triangle(a, b, c, *color);
    }
}

fn to_screen(p: Point) -> Vec2 {
    vec2(p.x as f32, p.y as f32)
}

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `info` for this workspace's crates.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sierpinski=info,sierpinski_viz=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Subdivides the scene once, then repaints its leaves every frame until
/// the window closes or Escape is pressed.
///
/// # Errors
/// Returns the subdivision error before any frame is drawn if the scene's
/// depth or triangle is invalid.
pub async fn run_scene(scene: Scene) -> sierpinski::Result<()> {
    let leaves = scene.leaves()?;
    info!(
        depth = scene.depth,
        leaves = leaves.len(),
        fill = %scene.fill,
        "scene ready"
    );

    let fill = Color::from(scene.fill);
    let background = Color::from(scene.background);
    let mut renderer = MacroquadRenderer;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        clear_background(background);
        let mut painter = RenderVisitor::new(&mut renderer, fill);
        for leaf in &leaves {
            painter.visit(leaf);
        }

        next_frame().await
    }

    Ok(())
}
