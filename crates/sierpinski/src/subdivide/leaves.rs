//! Lazy, stack-based leaf traversal.

use std::iter::FusedIterator;

use crate::{Result, Triangle};

use super::depth::Depth;
use super::subdivider::validate;

/// Returns an iterator over the leaves of `triangle` subdivided `depth` times.
///
/// Yields the same sequence as [`subdivide`](fn@crate::subdivide) but computes
/// each leaf on demand from an explicit stack, so memory stays proportional
/// to `depth` rather than `3^depth`.
///
/// # Errors
/// Same as [`subdivide`](fn@crate::subdivide); validation happens here, before
/// the iterator is returned.
pub fn leaves(triangle: &Triangle, depth: i64) -> Result<Leaves> {
    let depth = validate(triangle, depth)?;
    Ok(Leaves::new(*triangle, depth))
}

/// Iterator over subdivision leaves in canonical pre-order.
///
/// Created by [`leaves`].
#[derive(Debug, Clone)]
pub struct Leaves {
    stack: Vec<(Triangle, Depth)>,
    remaining: Option<u64>,
}

impl Leaves {
    fn new(triangle: Triangle, depth: Depth) -> Self {
        // Each level leaves at most two pending siblings behind.
        let mut stack = Vec::with_capacity(2 * depth.get().min(64) as usize + 1);
        stack.push((triangle, depth));
        Self {
            stack,
            remaining: depth.leaf_count(),
        }
    }
}

impl Iterator for Leaves {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        while let Some((triangle, depth)) = self.stack.pop() {
            match depth.child() {
                None => {
                    if let Some(n) = self.remaining.as_mut() {
                        *n -= 1;
                    }
                    return Some(triangle);
                }
                Some(child) => {
                    // Reversed so the corner of p0 is popped first.
                    for corner in triangle.corners().into_iter().rev() {
                        self.stack.push((corner, child));
                    }
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.and_then(|n| usize::try_from(n).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Leaves {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{subdivide, SubdivisionError};

    fn reference() -> Triangle {
        Triangle::from_coords((0.0, 0.0), (4.0, 0.0), (0.0, 4.0))
    }

    #[test]
    fn matches_recursive_order() {
        let t = Triangle::from_coords((-3.0, 1.5), (9.0, 0.25), (2.0, 11.0));
        for depth in 0..6 {
            let lazy: Vec<Triangle> = leaves(&t, depth).unwrap().collect();
            assert_eq!(lazy, subdivide(&t, depth).unwrap());
        }
    }

    #[test]
    fn size_hint_is_exact_and_counts_down() {
        let mut it = leaves(&reference(), 3).unwrap();
        assert_eq!(it.size_hint(), (27, Some(27)));
        it.next();
        assert_eq!(it.size_hint(), (26, Some(26)));
        let rest = it.by_ref().count();
        assert_eq!(rest, 26);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn depth_zero_yields_input_once() {
        let t = reference();
        let mut it = leaves(&t, 0).unwrap();
        assert_eq!(it.next(), Some(t));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn rejects_negative_depth() {
        assert_eq!(
            leaves(&reference(), -2).unwrap_err(),
            SubdivisionError::NegativeDepth(-2)
        );
    }

    #[test]
    fn huge_depth_is_lazy() {
        // 3^64 leaves would never fit in memory; the first few are still cheap.
        let mut it = leaves(&reference(), 64).unwrap();
        assert_eq!(it.size_hint(), (usize::MAX, None));
        let first = it.next().unwrap();
        assert_eq!(first.vertices()[0], reference().vertices()[0]);
        assert_eq!(it.take(8).count(), 8);
    }
}
