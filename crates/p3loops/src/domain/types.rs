//! Identifier and configuration types for the fundamental domain.

use std::fmt;

/// Index of a generator (side or zone) in the domain's fixed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeneratorId(pub usize);

/// Side of the unit square.
///
/// Traversal directions: North runs west to east, East south to north, South east to
/// west, West north to south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::North => 0,
            Side::East => 1,
            Side::South => 2,
            Side::West => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::North => "north",
            Side::East => "east",
            Side::South => "south",
            Side::West => "west",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identification scheme of the square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// North ≡ East and South ≡ West zone by zone; quarter turns about the NE and SW
    /// corners (point group of order 4).
    QuarterTurn,
    /// Each side glued to itself by the half-turn about its midpoint, zone `j` to zone
    /// `z-1-j` (point group of order 2). Needs an even zone count.
    HalfTurn,
}

impl Symmetry {
    /// Order `k` of the point group; wallpaper rotation classes live in `0..k`.
    #[inline]
    pub fn rotation_order(self) -> u8 {
        match self {
            Symmetry::QuarterTurn => 4,
            Symmetry::HalfTurn => 2,
        }
    }
}

/// One boundary atom.
///
/// The generator covers side parameters `u0..=u1` (possibly decreasing); its own
/// parameter `t ∈ [0, 1]` maps to `u = u0 + t (u1 - u0)`. Identified generators share
/// `t`: the point at `t` on a generator is glued to the point at `t` on its partner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Generator {
    pub id: GeneratorId,
    pub side: Side,
    pub zone: usize,
    pub partner: GeneratorId,
    pub u0: f64,
    pub u1: f64,
}

impl Generator {
    /// Side parameter of the generator parameter `t`.
    #[inline]
    pub fn side_param(&self, t: f64) -> f64 {
        self.u0 + t * (self.u1 - self.u0)
    }
}

/// Position of a generator in the clockwise perimeter order starting at the NW corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerimeterSlot {
    pub rank: usize,
    /// Whether increasing parameter walks the perimeter clockwise.
    pub clockwise: bool,
}
