//! Recursion depth and the quantities it determines.

use std::fmt;

use crate::SubdivisionError;

/// A validated, non-negative recursion depth.
///
/// Depth 0 means the input triangle is itself the only leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Depth(u32);

impl Depth {
    /// The depth at which a triangle is emitted as-is.
    pub const LEAF: Depth = Depth(0);

    /// Wraps an already non-negative depth.
    #[inline]
    pub const fn new(depth: u32) -> Self {
        Self(depth)
    }

    /// Returns the raw depth.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `true` for depth 0.
    #[inline]
    pub const fn is_leaf(self) -> bool {
        self.0 == 0
    }

    /// Returns the depth one level further down, or `None` at a leaf.
    #[inline]
    pub fn child(self) -> Option<Depth> {
        self.0.checked_sub(1).map(Depth)
    }

    /// Number of leaves a subdivision at this depth emits.
    pub fn leaf_count(self) -> Option<u64> {
        leaf_count(self.0)
    }
}

impl TryFrom<i64> for Depth {
    type Error = SubdivisionError;

    fn try_from(depth: i64) -> Result<Self, Self::Error> {
        if depth < 0 {
            return Err(SubdivisionError::NegativeDepth(depth));
        }
        u32::try_from(depth)
            .map(Depth)
            .map_err(|_| SubdivisionError::DepthOutOfRange(depth))
    }
}

impl From<u32> for Depth {
    fn from(depth: u32) -> Self {
        Self(depth)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Returns `3^depth`, the number of leaves emitted at `depth`.
///
/// Returns `None` if the count does not fit in a `u64` (depth > 40).
pub fn leaf_count(depth: u32) -> Option<u64> {
    3u64.checked_pow(depth)
}

/// Fraction of the input triangle's area still covered after `depth` levels.
///
/// Each level drops the central quarter of every triangle, so this is
/// `(3/4)^depth`.
pub fn covered_area_ratio(depth: u32) -> f64 {
    // Anything past i32::MAX underflows to zero long before.
    i32::try_from(depth).map_or(0.0, |d| 0.75f64.powi(d))
}

/// Similarity dimension of the gasket: three copies at scale 1/2.
pub const SIMILARITY_DIMENSION: f64 = 1.584_962_500_721_156;
