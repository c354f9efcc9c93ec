//! Plane embeddings of continuous points.
//!
//! - `square_position`: the rendering geometry (unit square, y up).
//! - `chord_position`: the same point pushed radially onto the disc of radius 1/2
//!   inscribed in the square. Boundary points land on the circle in perimeter order,
//!   so straight chords between them meet iff their endpoints interleave, even when
//!   both lie on one side of the square.

use nalgebra::Vector2;

use super::build::{perimeter_coord, side_point};
use super::Domain;
use crate::point::Point;

impl Domain {
    pub fn square_position(&self, p: &Point<f64>) -> Vector2<f64> {
        match p {
            Point::Boundary(b) => {
                let g = &self.generators[b.generator.0];
                side_point(g.side, g.side_param(b.pos))
            }
            Point::Interior(ip) => Vector2::new(ip.east, 1.0 - ip.south),
        }
    }

    pub fn chord_position(&self, p: &Point<f64>) -> Vector2<f64> {
        let c = Vector2::new(0.5, 0.5);
        let d = self.square_position(p) - c;
        let norm = d.norm();
        if norm <= f64::EPSILON {
            return c;
        }
        c + d * (d.amax() / norm)
    }

    /// Clockwise perimeter coordinate in `[0, 4]` of a continuous boundary point.
    pub fn perimeter_coord(&self, p: &Point<f64>) -> Option<f64> {
        p.as_boundary().map(|b| {
            let g = &self.generators[b.generator.0];
            perimeter_coord(g.side, g.side_param(b.pos))
        })
    }
}
