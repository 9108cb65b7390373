//! Sierpinski subdivision of triangles.
//!
//! Each level splits a triangle at its edge midpoints into four congruent
//! pieces, keeps the three corner pieces and drops the central one. After
//! `d` levels a triangle becomes `3^d` leaves covering `(3/4)^d` of its area.
//!
//! Leaves are always produced in the same canonical pre-order (corner of
//! `p0`, then `p1`, then `p2`, recursively), whichever entry point is used:
//!
//! - [`subdivide`]: collects leaves into a `Vec`
//! - [`subdivide_with`]: hands each leaf to a [`TriangleVisitor`]
//! - [`leaves`]: lazy iterator backed by an explicit stack
//! - [`subdivide_par`]: fork/join on the rayon pool, same output as [`subdivide`]
//!
//! # Example
//!
//! ```
//! use sierpinski::{subdivide_with, CountingVisitor, Triangle};
//!
//! let t = Triangle::from_coords((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
//! let mut counter = CountingVisitor::new();
//! subdivide_with(&t, 3, &mut counter).unwrap();
//!
//! assert_eq!(counter.count(), 27);
//! assert!((counter.total_area() - 8.0 * 0.75f64.powi(3)).abs() < 1e-12);
//! ```

mod depth;
mod leaves;
mod parallel;
mod subdivider;
mod visitor;

pub use depth::{covered_area_ratio, leaf_count, Depth, SIMILARITY_DIMENSION};
pub use leaves::{leaves, Leaves};
pub use parallel::{subdivide_par, PARALLEL_CUTOFF};
pub use subdivider::{subdivide, subdivide_with};
pub use visitor::{CollectingVisitor, CountingVisitor, FnVisitor, TriangleVisitor};
