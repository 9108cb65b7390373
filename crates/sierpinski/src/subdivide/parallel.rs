//! Fork/join subdivision on the rayon thread pool.

use tracing::trace;

use crate::{Result, Triangle};

use super::depth::Depth;
use super::subdivider::{emit_leaves, validate};
use super::visitor::CollectingVisitor;

/// Remaining depth at or below which branches run sequentially.
///
/// A subtree at this depth holds `3^6 = 729` leaves, enough work to amortize
/// a rayon task.
pub const PARALLEL_CUTOFF: u32 = 6;

/// Parallel variant of [`subdivide`](fn@crate::subdivide).
///
/// The three corner branches of each level above [`PARALLEL_CUTOFF`] run as
/// rayon tasks; their results are concatenated in corner order, so the output
/// is identical to the sequential form.
///
/// # Errors
/// Same as [`subdivide`](fn@crate::subdivide).
pub fn subdivide_par(triangle: &Triangle, depth: i64) -> Result<Vec<Triangle>> {
    let depth = validate(triangle, depth)?;
    if depth.get() <= PARALLEL_CUTOFF {
        trace!(%depth, "depth below parallel cutoff, subdividing sequentially");
    }
    Ok(subdivide_branch(triangle, depth))
}

fn subdivide_branch(triangle: &Triangle, depth: Depth) -> Vec<Triangle> {
    if depth.get() <= PARALLEL_CUTOFF {
        return sequential(triangle, depth);
    }

    // depth > PARALLEL_CUTOFF >= 0, so there is always a child level.
    let child = Depth::new(depth.get() - 1);
    let [c0, c1, c2] = triangle.corners();
    let (mut first, (second, third)) = rayon::join(
        || subdivide_branch(&c0, child),
        || {
            rayon::join(
                || subdivide_branch(&c1, child),
                || subdivide_branch(&c2, child),
            )
        },
    );

    first.reserve(second.len() + third.len());
    first.extend(second);
    first.extend(third);
    first
}

fn sequential(triangle: &Triangle, depth: Depth) -> Vec<Triangle> {
    let capacity = depth
        .leaf_count()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    let mut visitor = CollectingVisitor::with_capacity(capacity);
    emit_leaves(triangle, depth, &mut visitor);
    visitor.into_triangles()
}
