//! Triangle representation for subdivision.

use nalgebra::{Point2, Vector2};

use crate::{Result, SubdivisionError};

/// A point in the plane.
pub type Point = Point2<f64>;

/// Returns the point halfway between `a` and `b`.
///
/// Each coordinate is `(a + b) / 2` in plain `f64` arithmetic, so the result
/// is bit-for-bit reproducible. When the sum overflows, the coordinate is
/// computed as `a / 2 + b / 2` instead, keeping finite inputs finite.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new(half_sum(a.x, b.x), half_sum(a.y, b.y))
}

#[inline]
fn half_sum(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}

/// A triangle in the plane, defined by three ordered vertices.
///
/// Vertex order matters: subdivision pairs up vertices by position, so the
/// children of a triangle keep the parent's edge correspondence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    /// Creates a new triangle from three points.
    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self {
            vertices: [p0, p1, p2],
        }
    }

    /// Creates a triangle from raw `(x, y)` pairs.
    pub fn from_coords(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> Self {
        Self::new(
            Point::new(p0.0, p0.1),
            Point::new(p1.0, p1.1),
            Point::new(p2.0, p2.1),
        )
    }

    /// Returns the three vertices of the triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    /// Checks that every coordinate is finite.
    ///
    /// # Errors
    /// Returns [`SubdivisionError::NonFiniteVertex`] for the first vertex
    /// holding a NaN or infinite coordinate.
    pub fn validate(&self) -> Result<()> {
        for (index, p) in self.vertices.iter().enumerate() {
            if !(p.x.is_finite() && p.y.is_finite()) {
                return Err(SubdivisionError::NonFiniteVertex {
                    index,
                    x: p.x,
                    y: p.y,
                });
            }
        }
        Ok(())
    }

    /// Returns the edge midpoints `[m01, m12, m20]`.
    pub fn midpoints(&self) -> [Point; 3] {
        let [p0, p1, p2] = self.vertices;
        [midpoint(p0, p1), midpoint(p1, p2), midpoint(p2, p0)]
    }

    /// Returns the three corner sub-triangles in canonical order.
    ///
    /// Corner `i` keeps vertex `pi` and joins it to the midpoints of the two
    /// edges adjacent to it:
    /// 1. `(p0, m01, m20)`
    /// 2. `(p1, m01, m12)`
    /// 3. `(p2, m20, m12)`
    pub fn corners(&self) -> [Triangle; 3] {
        let [p0, p1, p2] = self.vertices;
        let [m01, m12, m20] = self.midpoints();
        [
            Triangle::new(p0, m01, m20),
            Triangle::new(p1, m01, m12),
            Triangle::new(p2, m20, m12),
        ]
    }

    /// Returns the central triangle `(m01, m12, m20)` that subdivision drops.
    pub fn central(&self) -> Triangle {
        let [m01, m12, m20] = self.midpoints();
        Triangle::new(m01, m12, m20)
    }

    /// Computes the signed area.
    ///
    /// Positive for counter-clockwise winding in a y-up frame.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        let ab: Vector2<f64> = b - a;
        let ac: Vector2<f64> = c - a;
        ab.perp(&ac) / 2.0
    }

    /// Computes the unsigned area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns `true` if the vertices are collinear (zero area).
    pub fn is_degenerate(&self) -> bool {
        self.signed_area() == 0.0
    }

    /// Computes the centroid (center of mass) of the triangle.
    pub fn centroid(&self) -> Point {
        let [a, b, c] = &self.vertices;
        Point::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// Returns the side lengths `[|p0p1|, |p1p2|, |p2p0|]`.
    pub fn side_lengths(&self) -> [f64; 3] {
        let [p0, p1, p2] = &self.vertices;
        [(p1 - p0).norm(), (p2 - p1).norm(), (p0 - p2).norm()]
    }

    /// Applies `f` to every vertex, keeping vertex order.
    pub fn map<F>(&self, mut f: F) -> Triangle
    where
        F: FnMut(Point) -> Point,
    {
        let [p0, p1, p2] = self.vertices;
        Triangle::new(f(p0), f(p1), f(p2))
    }
}

impl From<[Point; 3]> for Triangle {
    fn from(vertices: [Point; 3]) -> Self {
        Self { vertices }
    }
}

impl From<Triangle> for [Point; 3] {
    fn from(triangle: Triangle) -> Self {
        triangle.vertices
    }
}
