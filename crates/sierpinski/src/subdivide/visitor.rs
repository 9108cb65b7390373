//! Visitor pattern for leaf emission.
//!
//! Visitors allow custom processing of leaf triangles during subdivision
//! without coupling the recursion to specific use cases.

use crate::Triangle;

/// Visitor for processing leaf triangles during subdivision.
///
/// Implement this trait to define custom behavior for each emitted leaf.
/// Common uses include:
/// - Rendering (see [`RenderVisitor`](crate::RenderVisitor))
/// - Collecting leaves in canonical order
/// - Computing statistics without materializing the leaves
pub trait TriangleVisitor {
    /// Called once per leaf triangle, in canonical pre-order.
    fn visit(&mut self, triangle: &Triangle);
}

impl<V: TriangleVisitor + ?Sized> TriangleVisitor for &mut V {
    fn visit(&mut self, triangle: &Triangle) {
        (**self).visit(triangle);
    }
}

/// A simple visitor that collects all visited triangles.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Triangle>,
}

impl CollectingVisitor {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collecting visitor with room for `capacity` triangles.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            collected: Vec::with_capacity(capacity),
        }
    }

    /// Returns the collected triangles.
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.collected
    }

    /// Returns a reference to the collected triangles.
    pub fn triangles(&self) -> &[Triangle] {
        &self.collected
    }
}

impl TriangleVisitor for CollectingVisitor {
    fn visit(&mut self, triangle: &Triangle) {
        self.collected.push(*triangle);
    }
}

/// A visitor that calls a closure for each leaf.
pub struct FnVisitor<F>
where
    F: FnMut(&Triangle),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&Triangle),
{
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> TriangleVisitor for FnVisitor<F>
where
    F: FnMut(&Triangle),
{
    fn visit(&mut self, triangle: &Triangle) {
        (self.func)(triangle);
    }
}

/// Counts leaves and sums their areas.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingVisitor {
    count: u64,
    area: f64,
}

impl CountingVisitor {
    /// Creates a visitor with zero leaves counted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of leaves seen.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of the unsigned areas of the leaves seen.
    pub fn total_area(&self) -> f64 {
        self.area
    }
}

impl TriangleVisitor for CountingVisitor {
    fn visit(&mut self, triangle: &Triangle) {
        self.count += 1;
        self.area += triangle.area();
    }
}
