//! Recursive midpoint subdivision.

use tracing::debug;

use crate::{Result, Triangle};

use super::depth::Depth;
use super::visitor::{CollectingVisitor, TriangleVisitor};

/// Upper bound on the up-front allocation made by [`subdivide`].
///
/// Deep subdivisions still work; the vector just grows past this on demand.
const MAX_PREALLOCATED_LEAVES: usize = 1 << 20;

/// Subdivides `triangle` `depth` times and returns the leaf triangles.
///
/// The result holds exactly `3^depth` triangles in canonical pre-order:
/// the corner of `p0` first, then `p1`, then `p2`, recursively. The
/// central triangle of every level is dropped.
///
/// # Errors
/// Returns an `InvalidArgument` error if `depth` is negative (or larger than
/// `u32::MAX`) or any vertex coordinate is non-finite.
///
/// # Example
/// ```
/// use sierpinski::{subdivide, Triangle};
///
/// let t = Triangle::from_coords((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
/// let leaves = subdivide(&t, 1).unwrap();
/// assert_eq!(leaves[0], Triangle::from_coords((0.0, 0.0), (2.0, 0.0), (0.0, 2.0)));
/// assert_eq!(leaves.len(), 3);
/// ```
pub fn subdivide(triangle: &Triangle, depth: i64) -> Result<Vec<Triangle>> {
    let depth = validate(triangle, depth)?;
    let capacity = depth
        .leaf_count()
        .and_then(|n| usize::try_from(n).ok())
        .map_or(MAX_PREALLOCATED_LEAVES, |n| n.min(MAX_PREALLOCATED_LEAVES));

    let mut visitor = CollectingVisitor::with_capacity(capacity);
    emit_leaves(triangle, depth, &mut visitor);
    Ok(visitor.into_triangles())
}

/// Subdivides `triangle` `depth` times, handing each leaf to `visitor`.
///
/// The visitor sees exactly the sequence [`subdivide`] would return, one leaf
/// at a time, without the leaves being collected.
///
/// # Errors
/// Same as [`subdivide`]. On error the visitor is never called.
pub fn subdivide_with<V>(triangle: &Triangle, depth: i64, visitor: &mut V) -> Result<()>
where
    V: TriangleVisitor + ?Sized,
{
    let depth = validate(triangle, depth)?;
    emit_leaves(triangle, depth, visitor);
    Ok(())
}

/// Validates the inputs shared by every subdivision entry point.
pub(crate) fn validate(triangle: &Triangle, depth: i64) -> Result<Depth> {
    let depth = Depth::try_from(depth)?;
    triangle.validate()?;
    debug!(
        %depth,
        leaves = ?depth.leaf_count(),
        "subdividing triangle"
    );
    Ok(depth)
}

/// Recursively emits the leaves of `triangle` in canonical pre-order.
pub(crate) fn emit_leaves<V>(triangle: &Triangle, depth: Depth, visitor: &mut V)
where
    V: TriangleVisitor + ?Sized,
{
    match depth.child() {
        None => visitor.visit(triangle),
        Some(child) => {
            for corner in &triangle.corners() {
                emit_leaves(corner, child, visitor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, FnVisitor, SubdivisionError};

    fn reference() -> Triangle {
        Triangle::from_coords((0.0, 0.0), (4.0, 0.0), (0.0, 4.0))
    }

    #[test]
    fn depth_zero_is_identity() {
        let t = reference();
        assert_eq!(subdivide(&t, 0).unwrap(), vec![t]);
    }

    #[test]
    fn depth_one_emits_corners_in_order() {
        let leaves = subdivide(&reference(), 1).unwrap();
        assert_eq!(
            leaves,
            vec![
                Triangle::from_coords((0.0, 0.0), (2.0, 0.0), (0.0, 2.0)),
                Triangle::from_coords((4.0, 0.0), (2.0, 0.0), (2.0, 2.0)),
                Triangle::from_coords((0.0, 4.0), (0.0, 2.0), (2.0, 2.0)),
            ]
        );
    }

    #[test]
    fn depth_two_is_preorder_of_corners() {
        let t = reference();
        let leaves = subdivide(&t, 2).unwrap();
        assert_eq!(leaves.len(), 9);

        let expected: Vec<Triangle> = t.corners().iter().flat_map(|c| c.corners()).collect();
        assert_eq!(leaves, expected);
    }

    #[test]
    fn central_triangle_is_never_emitted() {
        let t = reference();
        let central = t.central();
        let leaves = subdivide(&t, 1).unwrap();
        assert!(!leaves.contains(&central));
    }

    #[test]
    fn count_is_power_of_three() {
        let t = reference();
        for depth in 0..7 {
            let leaves = subdivide(&t, depth).unwrap();
            assert_eq!(leaves.len(), 3usize.pow(depth as u32));
        }
    }

    #[test]
    fn negative_depth_is_rejected_without_output() {
        let mut seen = 0;
        let mut visitor = FnVisitor::new(|_: &Triangle| seen += 1);

        let err = subdivide_with(&reference(), -1, &mut visitor).unwrap_err();
        assert_eq!(err, SubdivisionError::NegativeDepth(-1));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        drop(visitor);
        assert_eq!(seen, 0);

        assert!(subdivide(&reference(), -1).is_err());
    }

    #[test]
    fn non_finite_vertex_is_rejected() {
        let t = Triangle::from_coords((0.0, 0.0), (1.0, f64::INFINITY), (0.0, 1.0));
        let err = subdivide(&t, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(matches!(
            err,
            SubdivisionError::NonFiniteVertex { index: 1, .. }
        ));

        // Non-finite input is rejected even where no arithmetic would happen.
        let t = Triangle::from_coords((f64::NAN, 0.0), (1.0, 0.0), (0.0, 1.0));
        assert!(subdivide(&t, 0).is_err());
    }

    #[test]
    fn degenerate_triangle_at_depth_zero_is_returned_unchanged() {
        let t = Triangle::from_coords((0.0, 0.0), (1.0, 1.0), (3.0, 3.0));
        assert_eq!(subdivide(&t, 0).unwrap(), vec![t]);
    }

    #[test]
    fn degenerate_triangle_still_subdivides() {
        let t = Triangle::from_coords((0.0, 0.0), (1.0, 1.0), (3.0, 3.0));
        let leaves = subdivide(&t, 2).unwrap();
        assert_eq!(leaves.len(), 9);
        assert!(leaves.iter().all(Triangle::is_degenerate));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let t = Triangle::from_coords((0.1, 0.7), (13.3, -2.9), (5.5, 8.25));
        let a = subdivide(&t, 5).unwrap();
        let b = subdivide(&t, 5).unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            for (p, q) in x.vertices().iter().zip(y.vertices()) {
                assert_eq!(p.x.to_bits(), q.x.to_bits());
                assert_eq!(p.y.to_bits(), q.y.to_bits());
            }
        }
    }
}
