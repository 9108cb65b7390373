//! Renderer capability consumed by subdivision.
//!
//! The core never draws anything itself. A renderer is anything that can fill
//! a triangle with a color of its own choosing; [`RenderVisitor`] bridges it
//! to the visitor interface so leaves are painted as they are emitted.

use crate::{subdivide_with, Result, Triangle, TriangleVisitor};

/// A drawing surface that can fill triangles.
///
/// Coordinates are passed through untouched, so the renderer decides what the
/// origin and axes mean.
pub trait TriangleRenderer {
    /// The color representation used by this renderer.
    type Color;

    /// Fills `triangle` with `color`.
    fn fill(&mut self, triangle: &Triangle, color: &Self::Color);
}

impl<R: TriangleRenderer + ?Sized> TriangleRenderer for &mut R {
    type Color = R::Color;

    fn fill(&mut self, triangle: &Triangle, color: &Self::Color) {
        (**self).fill(triangle, color);
    }
}

/// Visitor that fills every leaf with one color.
pub struct RenderVisitor<'a, R: TriangleRenderer + ?Sized> {
    renderer: &'a mut R,
    color: R::Color,
    painted: usize,
}

impl<'a, R: TriangleRenderer + ?Sized> RenderVisitor<'a, R> {
    /// Creates a visitor that fills with `color` on `renderer`.
    pub fn new(renderer: &'a mut R, color: R::Color) -> Self {
        Self {
            renderer,
            color,
            painted: 0,
        }
    }

    /// Number of triangles filled so far.
    pub fn painted(&self) -> usize {
        self.painted
    }
}

impl<R: TriangleRenderer + ?Sized> TriangleVisitor for RenderVisitor<'_, R> {
    fn visit(&mut self, triangle: &Triangle) {
        self.renderer.fill(triangle, &self.color);
        self.painted += 1;
    }
}

/// Paints the Sierpinski subdivision of `triangle` onto `renderer`.
///
/// Returns the number of triangles filled.
///
/// # Errors
/// Same as [`subdivide`](fn@crate::subdivide); nothing is drawn on error.
pub fn render<R>(renderer: &mut R, triangle: &Triangle, depth: i64, color: R::Color) -> Result<usize>
where
    R: TriangleRenderer + ?Sized,
{
    let mut visitor = RenderVisitor::new(renderer, color);
    subdivide_with(triangle, depth, &mut visitor)?;
    Ok(visitor.painted())
}
