//! Crossing detection: one contract, two strategies.
//!
//! - `ContinuousDetector`: embeds chords in the plane (`Domain::chord_position`) and
//!   tests proper segment intersection with orientation predicates and an epsilon.
//! - `DiscreteDetector`: exact interleaving test on the cyclic perimeter order of
//!   ordinal positions.
//!
//! Chords that share an endpoint, or where an endpoint grazes the other chord, never
//! cross. "Share" means the same literal generator and position: endpoints that only
//! coincide through the identification (`north@10` and `east@10`) sit at different
//! places of the square, so such chords get the full test. An exemption on
//! identification-equivalent endpoints would instead accept `north@10 -> south@10`
//! followed by `west@10 -> east@50`, whose chords cut each other. Both strategies also own point equality so that every tolerance lives here
//! and the validator stays generic.

mod continuous;
mod discrete;

pub use continuous::ContinuousDetector;
pub use discrete::DiscreteDetector;

use crate::domain::Domain;
use crate::error::StructuralError;
use crate::point::{Edge, InteriorPoint, Point, Position};

/// Crossing and equality predicates for one point representation.
pub trait CrossingDetector {
    type Pos: Position;

    fn domain(&self) -> &Domain;

    /// Structural check of a single point (known generator, position in range).
    fn check_point(&self, p: &Point<Self::Pos>) -> Result<(), StructuralError>;

    /// Positions on one group denoting the same point.
    fn same_position(&self, a: Self::Pos, b: Self::Pos) -> bool;

    /// `x` strictly between `a` and `b` (either order) on one group.
    fn strictly_between(&self, x: Self::Pos, a: Self::Pos, b: Self::Pos) -> bool;

    fn same_interior(&self, a: &InteriorPoint, b: &InteriorPoint) -> bool;

    fn crosses(&self, a: &Edge<Self::Pos>, b: &Edge<Self::Pos>) -> bool;

    /// Same group position (identification aware), or the same interior point.
    fn points_equal(&self, p: &Point<Self::Pos>, q: &Point<Self::Pos>) -> bool {
        match (p, q) {
            (Point::Boundary(a), Point::Boundary(b)) => {
                self.domain().same_group(a.generator, b.generator)
                    && self.same_position(a.pos, b.pos)
            }
            (Point::Interior(a), Point::Interior(b)) => self.same_interior(a, b),
            _ => false,
        }
    }

    /// Index of the first edge in `existing` crossed by `edge`.
    fn first_crossing(&self, edge: &Edge<Self::Pos>, existing: &[Edge<Self::Pos>]) -> Option<usize> {
        existing.iter().position(|e| self.crosses(edge, e))
    }
}

/// Strict cyclic containment of `x` in the arc running from `a` to `b`.
pub(crate) fn inside_arc<K: PartialOrd>(x: &K, a: &K, b: &K) -> bool {
    if a < b {
        a < x && x < b
    } else {
        x > a || x < b
    }
}

/// Whether every consecutive pair chains (`edges[i].to == edges[i+1].from`, identification aware).
pub fn is_chained<D: CrossingDetector>(detector: &D, edges: &[Edge<D::Pos>]) -> bool {
    edges
        .windows(2)
        .all(|w| detector.points_equal(&w[0].to, &w[1].from))
}

/// First pair `(i, j)`, `i < j`, of crossing edges.
pub fn first_crossing_pair<D: CrossingDetector>(
    detector: &D,
    edges: &[Edge<D::Pos>],
) -> Option<(usize, usize)> {
    (0..edges.len()).find_map(|j| {
        detector
            .first_crossing(&edges[j], &edges[..j])
            .map(|i| (i, j))
    })
}

#[inline]
pub fn is_noncrossing<D: CrossingDetector>(detector: &D, edges: &[Edge<D::Pos>]) -> bool {
    first_crossing_pair(detector, edges).is_none()
}

#[inline]
pub fn is_noncrossing_path<D: CrossingDetector>(detector: &D, edges: &[Edge<D::Pos>]) -> bool {
    is_chained(detector, edges) && is_noncrossing(detector, edges)
}

#[cfg(test)]
mod tests;
