//! Fundamental domain: generators, identification, embeddings, point registry.
//!
//! Purpose
//! - Describe the unit square's boundary atoms (sides, or zones of sides), the fixed
//!   pairing that glues them, and the two point representations (continuous parameter,
//!   discrete ordinal) with conversion between them.
//!
//! Conventions
//! - Generators are ordered side by side (N, E, S, W), then by zone.
//! - Identified generators share their parameter `t`. A pair's shared point list is
//!   keyed by the smaller id (its "group"); `to_canonical` relabels onto the larger.
//! - Point equality needs a position tolerance and lives with the crossing detectors
//!   (`crate::crossing::CrossingDetector::points_equal`); this module only answers
//!   group membership.
//!
//! Code cross-refs: `crate::point::{Point, Edge}`, `crate::frame::Frame`,
//! `registry::Registry`.

mod build;
mod embed;
pub mod registry;
mod types;

pub use registry::Registry;
pub use types::{Generator, GeneratorId, PerimeterSlot, Side, Symmetry};

use crate::error::StructuralError;
use crate::frame::Frame;
use crate::point::{Point, Position};

/// Immutable domain configuration; build with [`Domain::new`] or a preset.
#[derive(Clone, Debug)]
pub struct Domain {
    symmetry: Symmetry,
    zones: usize,
    generators: Vec<Generator>,
    perimeter: Vec<PerimeterSlot>,
    motions: Vec<Frame>,
    seed: (GeneratorId, GeneratorId),
}

impl Domain {
    #[inline]
    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    /// Zones per side.
    #[inline]
    pub fn zones(&self) -> usize {
        self.zones
    }

    /// Number of generators.
    #[inline]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    #[inline]
    pub fn generators(&self) -> &[Generator] {
        &self.generators
    }

    pub fn generator_ids(&self) -> impl Iterator<Item = GeneratorId> + '_ {
        self.generators.iter().map(|g| g.id)
    }

    pub fn generator(&self, g: GeneratorId) -> Result<&Generator, StructuralError> {
        self.generators
            .get(g.0)
            .ok_or(StructuralError::UnknownGenerator(g))
    }

    /// Generator covering zone `zone` of `side`.
    pub fn find(&self, side: Side, zone: usize) -> Option<GeneratorId> {
        (zone < self.zones).then(|| GeneratorId(side.index() * self.zones + zone))
    }

    /// Identification partner. Total, involutive, never `g` itself.
    ///
    /// Panics on an unknown id; check with [`Domain::generator`] first.
    #[inline]
    pub fn identified_generator_of(&self, g: GeneratorId) -> GeneratorId {
        self.generators[g.0].partner
    }

    /// Canonical representative of `g`'s pair; identified generators share one point list.
    #[inline]
    pub fn group(&self, g: GeneratorId) -> GeneratorId {
        g.min(self.identified_generator_of(g))
    }

    #[inline]
    pub fn same_group(&self, a: GeneratorId, b: GeneratorId) -> bool {
        self.group(a) == self.group(b)
    }

    #[inline]
    pub fn side(&self, g: GeneratorId) -> Side {
        self.generators[g.0].side
    }

    #[inline]
    pub fn perimeter(&self, g: GeneratorId) -> PerimeterSlot {
        self.perimeter[g.0]
    }

    /// Gluing motion of `g`: carries the partner's segment onto `g`'s segment, i.e. it
    /// places the neighbouring copy entered by leaving through `g`.
    #[inline]
    pub fn motion(&self, g: GeneratorId) -> &Frame {
        &self.motions[g.0]
    }

    /// Generator pair of the canonical first edge used to break rotational symmetry.
    #[inline]
    pub fn seed_generators(&self) -> (GeneratorId, GeneratorId) {
        self.seed
    }

    /// Relabel a boundary point onto the larger id of its pair (East for North, West
    /// for South on the one-zone square).
    pub fn to_canonical<P: Position>(&self, p: &Point<P>) -> Point<P> {
        match p {
            Point::Boundary(b) => {
                let g = b.generator.max(self.identified_generator_of(b.generator));
                Point::boundary(g, b.pos)
            }
            Point::Interior(_) => *p,
        }
    }

    /// Where the next edge starts after a path arrives at `p`: the partner image of a
    /// boundary point, or the interior point itself.
    pub fn continuation<P: Position>(&self, p: &Point<P>) -> Point<P> {
        match p {
            Point::Boundary(b) => {
                Point::boundary(self.identified_generator_of(b.generator), b.pos)
            }
            Point::Interior(_) => *p,
        }
    }
}
