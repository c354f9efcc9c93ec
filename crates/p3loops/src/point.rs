//! Points and edges in both representations.
//!
//! A boundary point carries a position of type `P`:
//! - `f64`: the continuous parameter in `[0, 1]` along the generator;
//! - `Ordinal`: the rank among the points placed on the generator's group.
//!
//! Interior points are only meaningful for the continuous representation.

use std::fmt;

use crate::domain::GeneratorId;

/// Position type of a boundary point.
pub trait Position: Copy + PartialOrd + fmt::Debug {}

impl Position for f64 {}

/// Dense rank of a point within its group, sorted by parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ordinal(pub usize);

impl Position for Ordinal {}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryPoint<P> {
    pub generator: GeneratorId,
    pub pos: P,
}

/// Interior point, measured southward from the north side and eastward from the west side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteriorPoint {
    pub south: f64,
    pub east: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Point<P> {
    Boundary(BoundaryPoint<P>),
    Interior(InteriorPoint),
}

impl<P: Position> Point<P> {
    #[inline]
    pub fn boundary(generator: GeneratorId, pos: P) -> Self {
        Self::Boundary(BoundaryPoint { generator, pos })
    }

    #[inline]
    pub fn interior(south: f64, east: f64) -> Self {
        Self::Interior(InteriorPoint { south, east })
    }

    #[inline]
    pub fn as_boundary(&self) -> Option<&BoundaryPoint<P>> {
        match self {
            Self::Boundary(b) => Some(b),
            Self::Interior(_) => None,
        }
    }

    #[inline]
    pub fn generator(&self) -> Option<GeneratorId> {
        self.as_boundary().map(|b| b.generator)
    }

    #[inline]
    pub fn is_interior(&self) -> bool {
        matches!(self, Self::Interior(_))
    }
}

/// Directed chord `from -> to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<P> {
    pub from: Point<P>,
    pub to: Point<P>,
}

impl<P: Position> Edge<P> {
    #[inline]
    pub fn new(from: Point<P>, to: Point<P>) -> Self {
        Self { from, to }
    }

    /// Both endpoints on the literal same generator.
    pub fn is_same_generator(&self) -> bool {
        match (&self.from, &self.to) {
            (Point::Boundary(a), Point::Boundary(b)) => a.generator == b.generator,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_generator_needs_two_boundary_ends() {
        let (n, e) = (GeneratorId(0), GeneratorId(1));
        assert!(Edge::new(Point::boundary(n, 0.2), Point::boundary(n, 0.7)).is_same_generator());
        assert!(!Edge::new(Point::boundary(n, 0.2), Point::boundary(e, 0.2)).is_same_generator());
        let inner = Point::interior(0.5, 0.5);
        assert!(inner.is_interior());
        assert!(!Point::boundary(n, 0.2).is_interior());
        assert!(!Edge::new(Point::boundary(n, 0.2), inner).is_same_generator());
    }
}
