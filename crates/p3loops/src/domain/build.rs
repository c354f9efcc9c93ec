//! Domain construction: generator layout, pairing, perimeter order, gluing motions.

use nalgebra::Vector2;

use super::types::{Generator, GeneratorId, PerimeterSlot, Side, Symmetry};
use super::Domain;
use crate::error::StructuralError;
use crate::frame::Frame;

impl Domain {
    /// Build a square domain with `zones` generators per side.
    ///
    /// Fails for `zones == 0`, and for odd `zones` under [`Symmetry::HalfTurn`] (the
    /// middle zone would be glued to itself).
    pub fn new(symmetry: Symmetry, zones: usize) -> Result<Self, StructuralError> {
        if zones == 0 {
            return Err(StructuralError::invalid_domain("need at least one zone per side"));
        }
        if symmetry == Symmetry::HalfTurn && zones % 2 != 0 {
            return Err(StructuralError::invalid_domain(format!(
                "half-turn gluing needs an even zone count, got {zones}"
            )));
        }
        let generators = layout(symmetry, zones);
        for g in &generators {
            let p = generators
                .get(g.partner.0)
                .ok_or(StructuralError::UnknownGenerator(g.partner))?;
            if g.partner == g.id || p.partner != g.id {
                return Err(StructuralError::invalid_domain(format!(
                    "pairing is not a fixed-point-free involution at generator {}",
                    g.id.0
                )));
            }
        }
        let perimeter = perimeter_slots(&generators);
        let motions = generators
            .iter()
            .map(|g| {
                let p = &generators[g.partner.0];
                let (a0, a1) = segment(p);
                let (b0, b1) = segment(g);
                Frame::carrying(a0, a1, b0, b1).ok_or_else(|| {
                    StructuralError::invalid_domain(format!(
                        "generators {} and {} have different lengths",
                        g.id.0, p.id.0
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let seed = seed_pair(&generators);
        Ok(Self {
            symmetry,
            zones,
            generators,
            perimeter,
            motions,
            seed,
        })
    }

    /// The classic square: North ≡ East, South ≡ West, one generator per side.
    pub fn quarter_turn_square() -> Result<Self, StructuralError> {
        Self::new(Symmetry::QuarterTurn, 1)
    }

    /// Half-turn square with every side split into two zones.
    pub fn half_turn_square() -> Result<Self, StructuralError> {
        Self::new(Symmetry::HalfTurn, 2)
    }
}

fn layout(symmetry: Symmetry, zones: usize) -> Vec<Generator> {
    let z = zones as f64;
    let mut out = Vec::with_capacity(4 * zones);
    for side in Side::ALL {
        for j in 0..zones {
            let id = GeneratorId(side.index() * zones + j);
            let (u0, u1, partner) = match symmetry {
                Symmetry::QuarterTurn => {
                    let other = match side {
                        Side::North => Side::East,
                        Side::East => Side::North,
                        Side::South => Side::West,
                        Side::West => Side::South,
                    };
                    (
                        j as f64 / z,
                        (j + 1) as f64 / z,
                        GeneratorId(other.index() * zones + j),
                    )
                }
                Symmetry::HalfTurn => {
                    let mirror = zones - 1 - j;
                    let (u0, u1) = if j < zones / 2 {
                        (j as f64 / z, (j + 1) as f64 / z)
                    } else {
                        (1.0 - mirror as f64 / z, 1.0 - (mirror + 1) as f64 / z)
                    };
                    (u0, u1, GeneratorId(side.index() * zones + mirror))
                }
            };
            out.push(Generator {
                id,
                side,
                zone: j,
                partner,
                u0,
                u1,
            });
        }
    }
    out
}

/// Point of the unit square at side parameter `u` (side traversal directions).
pub(crate) fn side_point(side: Side, u: f64) -> Vector2<f64> {
    match side {
        Side::North => Vector2::new(u, 1.0),
        Side::East => Vector2::new(1.0, u),
        Side::South => Vector2::new(1.0 - u, 0.0),
        Side::West => Vector2::new(0.0, 1.0 - u),
    }
}

/// Clockwise perimeter coordinate in `[0, 4]`, starting at the NW corner.
pub(crate) fn perimeter_coord(side: Side, u: f64) -> f64 {
    match side {
        Side::North => u,
        Side::East => 2.0 - u,
        Side::South => 2.0 + u,
        Side::West => 4.0 - u,
    }
}

fn segment(g: &Generator) -> (Vector2<f64>, Vector2<f64>) {
    (side_point(g.side, g.u0), side_point(g.side, g.u1))
}

fn perimeter_slots(generators: &[Generator]) -> Vec<PerimeterSlot> {
    let coord = |g: &Generator, t: f64| perimeter_coord(g.side, g.side_param(t));
    let mut order: Vec<usize> = (0..generators.len()).collect();
    order.sort_by(|&a, &b| {
        coord(&generators[a], 0.5)
            .partial_cmp(&coord(&generators[b], 0.5))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut slots = vec![
        PerimeterSlot {
            rank: 0,
            clockwise: true
        };
        generators.len()
    ];
    for (rank, &i) in order.iter().enumerate() {
        let g = &generators[i];
        slots[i] = PerimeterSlot {
            rank,
            clockwise: coord(g, 0.75) > coord(g, 0.25),
        };
    }
    slots
}

/// First generator and the first one on another side outside its pair.
fn seed_pair(generators: &[Generator]) -> (GeneratorId, GeneratorId) {
    let first = &generators[0];
    let second = generators
        .iter()
        .find(|g| g.side != first.side && g.id != first.partner)
        .map_or(first.partner, |g| g.id);
    (first.id, second)
}
