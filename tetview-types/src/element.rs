//! Canonicalized mesh elements.
//!
//! Elements store their vertex indices in sorted order, established at
//! construction time and never altered. Two elements referencing the same
//! vertex set therefore compare equal and order consistently no matter
//! what order the source file declared the vertices in, which is what
//! makes deduplicated edge extraction and set membership work.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capability contract for element types stored in a zone.
///
/// An element is nothing more than a fixed-size tuple of vertex indices
/// in canonical (sorted) order. Algorithms that only need the index
/// tuple, such as edge extraction, are written against this trait.
pub trait Element {
    /// Number of vertex indices in the tuple.
    const VERTEX_COUNT: usize;

    /// Vertex indices in canonical (sorted) order.
    ///
    /// The order reflects neither winding nor the order in the source
    /// file; callers must not assume either.
    fn points(&self) -> &[u32];
}

/// A surface triangle referencing three points by index.
///
/// # Example
///
/// ```
/// use tetview_types::{Element, Triangle};
///
/// // Any permutation of the same indices yields the same element
/// let a = Triangle::new(2, 0, 1);
/// let b = Triangle::new(1, 2, 0);
/// assert_eq!(a, b);
/// assert_eq!(a.points(), &[0, 1, 2][..]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    points: [u32; 3],
}

impl Triangle {
    /// Create a triangle from three vertex indices in any order.
    ///
    /// The indices are sorted into canonical form; the original order is
    /// not retained.
    #[must_use]
    pub fn new(p0: u32, p1: u32, p2: u32) -> Self {
        let mut points = [p0, p1, p2];
        points.sort_unstable();
        Self { points }
    }
}

impl Element for Triangle {
    const VERTEX_COUNT: usize = 3;

    #[inline]
    fn points(&self) -> &[u32] {
        &self.points
    }
}

/// A volumetric tetrahedron referencing four points by index.
///
/// Ordering is lexicographic over the canonical tuple, giving a strict
/// total order usable for set membership.
///
/// # Example
///
/// ```
/// use tetview_types::Tetrahedron;
///
/// let a = Tetrahedron::new(3, 1, 0, 2);
/// let b = Tetrahedron::new(0, 1, 2, 3);
/// assert_eq!(a, b);
/// assert!(a < Tetrahedron::new(0, 1, 2, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tetrahedron {
    points: [u32; 4],
}

impl Tetrahedron {
    /// Create a tetrahedron from four vertex indices in any order.
    #[must_use]
    pub fn new(p0: u32, p1: u32, p2: u32, p3: u32) -> Self {
        let mut points = [p0, p1, p2, p3];
        points.sort_unstable();
        Self { points }
    }
}

impl Element for Tetrahedron {
    const VERTEX_COUNT: usize = 4;

    #[inline]
    fn points(&self) -> &[u32] {
        &self.points
    }
}
