//! Sierpinski triangle subdivision.

mod error;
mod render;
pub mod subdivide;
mod triangle;

pub use error::{ErrorKind, Result, SubdivisionError};
pub use render::{render, RenderVisitor, TriangleRenderer};
pub use subdivide::{
    covered_area_ratio, leaf_count, leaves, subdivide, subdivide_par, subdivide_with,
    CollectingVisitor, CountingVisitor, Depth, FnVisitor, Leaves, TriangleVisitor,
    PARALLEL_CUTOFF, SIMILARITY_DIMENSION,
};
pub use triangle::{midpoint, Point, Triangle};
