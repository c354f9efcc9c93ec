//! Wallpaper index algebra: which tiled copy of the domain a path occupies.
//!
//! Purpose
//! - Track `(tx, ty, r)`: lattice coordinates plus rotation class `r ∈ 0..k`.
//!   Leaving the current copy through generator `g` moves to the neighbouring copy;
//!   `next_index` is that move as a finite table keyed by `(side of g, r)`.
//!
//! Model
//! - Quarter-turn (`k = 4`): the copy with index `I` is placed by
//!   `x ↦ R^r x + 2 (tx, ty)`, `R` the counterclockwise quarter turn. North and South
//!   rotate by three quarter turns, East and West by one; the lattice shift is the
//!   side's base shift rotated by `R^r`, so the tables are anchored alternately at the
//!   NE corner (North/East) and the SW corner (South/West, no shift).
//! - Half-turn (`k = 2`): placement `x ↦ (−1)^r x + tx (1,1) + ty (−1,1) + r (1,0)`.
//!   Every crossing flips `r`.
//! - Both satisfy `frame(next_index(g, I)) = frame(I) ∘ motion(g)`, where
//!   `motion(g)` is the domain's gluing motion.
//!
//! The index of a path is never stored: it is the fold of `next_index` over the
//! path's crossing events, starting from the identity.

use std::fmt;

use nalgebra::Vector2;

use crate::domain::{Domain, GeneratorId, Side, Symmetry};
use crate::frame::Frame;
use crate::path::Path;
use crate::point::{Point, Position};

/// Lattice coordinates and rotation class of one copy of the domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallpaperIndex {
    pub tx: i64,
    pub ty: i64,
    pub r: u8,
}

impl WallpaperIndex {
    pub const IDENTITY: Self = Self { tx: 0, ty: 0, r: 0 };

    pub fn new(tx: i64, ty: i64, r: u8) -> Self {
        Self { tx, ty, r }
    }

    /// Rigid motion placing this copy in the plane.
    pub fn frame(&self, symmetry: Symmetry) -> Frame {
        let (tx, ty) = (self.tx as f64, self.ty as f64);
        match symmetry {
            Symmetry::QuarterTurn => {
                let rot = Frame::quarter_turns(self.r);
                Frame::translation(Vector2::new(2.0 * tx, 2.0 * ty)).compose(&rot)
            }
            Symmetry::HalfTurn => {
                let rot = Frame::quarter_turns(2 * (self.r % 2));
                let t = Vector2::new(tx - ty + f64::from(self.r % 2), tx + ty);
                Frame::translation(t).compose(&rot)
            }
        }
    }
}

impl fmt::Display for WallpaperIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, r{})", self.tx, self.ty, self.r)
    }
}

/// Quarter-turn: rotation increment per side (in quarter turns).
const QT_DR: [u8; 4] = [3, 1, 3, 1];

/// Quarter-turn lattice shift, `[side][r]`.
const QT_SHIFT: [[(i64, i64); 4]; 4] = [
    [(0, 1), (-1, 0), (0, -1), (1, 0)],
    [(1, 0), (0, 1), (-1, 0), (0, -1)],
    [(0, 0); 4],
    [(0, 0); 4],
];

/// Half-turn lattice shift, `[r][side]`.
const HT_SHIFT: [[(i64, i64); 4]; 2] = [
    [(1, 1), (1, 0), (0, 0), (0, 1)],
    [(-1, -1), (-1, 0), (0, 0), (0, -1)],
];

/// Index after leaving copy `cur` through a generator on `side`.
pub fn step(symmetry: Symmetry, side: Side, cur: WallpaperIndex) -> WallpaperIndex {
    let s = side.index();
    match symmetry {
        Symmetry::QuarterTurn => {
            let r = cur.r % 4;
            let (dx, dy) = QT_SHIFT[s][usize::from(r)];
            WallpaperIndex::new(cur.tx + dx, cur.ty + dy, (r + QT_DR[s]) % 4)
        }
        Symmetry::HalfTurn => {
            let r = cur.r % 2;
            let (dx, dy) = HT_SHIFT[usize::from(r)][s];
            WallpaperIndex::new(cur.tx + dx, cur.ty + dy, 1 - r)
        }
    }
}

/// `next_index(g, I)` for the domain's scheme.
#[inline]
pub fn next_index(domain: &Domain, g: GeneratorId, cur: WallpaperIndex) -> WallpaperIndex {
    step(domain.symmetry(), domain.side(g), cur)
}

/// Crossing events of a path, in order: one per edge, keyed on the generator the
/// edge starts on.
///
/// Edges that stay in the current copy produce no event: edges starting at an
/// interior point, and chords whose two boundary ends lie on one literal generator
/// (the closing edge among them). A chord split by interior points counts once, at
/// its first edge.
pub fn crossing_events<P: Position>(path: &Path<P>) -> Vec<GeneratorId> {
    let edges = path.edges();
    let mut events = Vec::new();
    for (i, e) in edges.iter().enumerate() {
        let Point::Boundary(from) = &e.from else {
            continue;
        };
        let end = edges[i..]
            .iter()
            .map(|e| &e.to)
            .find(|p| !p.is_interior())
            .and_then(Point::generator);
        if end != Some(from.generator) {
            events.push(from.generator);
        }
    }
    events
}

/// Wallpaper index of a path: fold of `next_index` over its crossing events.
pub fn index_of<P: Position>(domain: &Domain, path: &Path<P>) -> WallpaperIndex {
    crossing_events(path)
        .into_iter()
        .fold(WallpaperIndex::IDENTITY, |cur, g| next_index(domain, g, cur))
}

/// Frame of the copy a path ends in.
pub fn frame_of<P: Position>(domain: &Domain, path: &Path<P>) -> Frame {
    index_of(domain, path).frame(domain.symmetry())
}
