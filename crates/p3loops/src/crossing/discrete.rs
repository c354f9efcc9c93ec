//! Discrete strategy: exact interleaving on the unrolled perimeter.
//!
//! A boundary point's key is `(perimeter rank of its generator, ±ordinal)`, negated
//! when the generator runs counterclockwise. Identified generators share ordinals, so
//! one point list is read forward on one of them and backward on the other. Keys of
//! distinct literal positions are distinct and totally ordered.

use super::{inside_arc, CrossingDetector};
use crate::domain::Domain;
use crate::error::StructuralError;
use crate::point::{Edge, InteriorPoint, Ordinal, Point};

#[derive(Clone, Copy, Debug)]
pub struct DiscreteDetector<'a> {
    domain: &'a Domain,
}

impl<'a> DiscreteDetector<'a> {
    pub fn new(domain: &'a Domain) -> Self {
        Self { domain }
    }

    /// Perimeter key; `None` for interior points.
    pub fn key(&self, p: &Point<Ordinal>) -> Option<(usize, i64)> {
        let b = p.as_boundary()?;
        let slot = self.domain.perimeter(b.generator);
        let k = b.pos.0 as i64;
        Some((slot.rank, if slot.clockwise { k } else { -k }))
    }
}

impl CrossingDetector for DiscreteDetector<'_> {
    type Pos = Ordinal;

    fn domain(&self) -> &Domain {
        self.domain
    }

    fn check_point(&self, p: &Point<Ordinal>) -> Result<(), StructuralError> {
        match p {
            Point::Boundary(b) => self.domain.generator(b.generator).map(|_| ()),
            Point::Interior(_) => Err(StructuralError::InteriorUnsupported),
        }
    }

    #[inline]
    fn same_position(&self, a: Ordinal, b: Ordinal) -> bool {
        a == b
    }

    fn strictly_between(&self, x: Ordinal, a: Ordinal, b: Ordinal) -> bool {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        lo < x && x < hi
    }

    fn same_interior(&self, _a: &InteriorPoint, _b: &InteriorPoint) -> bool {
        false
    }

    fn crosses(&self, a: &Edge<Ordinal>, b: &Edge<Ordinal>) -> bool {
        let (Some(a1), Some(a2), Some(b1), Some(b2)) = (
            self.key(&a.from),
            self.key(&a.to),
            self.key(&b.from),
            self.key(&b.to),
        ) else {
            return false;
        };
        if a1 == b1 || a1 == b2 || a2 == b1 || a2 == b2 || a1 == a2 || b1 == b2 {
            return false;
        }
        inside_arc(&b1, &a1, &a2) != inside_arc(&b2, &a1, &a2)
            && inside_arc(&a1, &b1, &b2) != inside_arc(&a2, &b1, &b2)
    }
}
