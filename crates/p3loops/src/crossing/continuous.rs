//! Continuous strategy: proper segment intersection in the chord embedding.

use nalgebra::Vector2;

use super::CrossingDetector;
use crate::cfg::EngineCfg;
use crate::domain::Domain;
use crate::error::StructuralError;
use crate::point::{Edge, InteriorPoint, Point};

#[derive(Clone, Copy, Debug)]
pub struct ContinuousDetector<'a> {
    domain: &'a Domain,
    cfg: EngineCfg,
}

impl<'a> ContinuousDetector<'a> {
    pub fn new(domain: &'a Domain, cfg: EngineCfg) -> Self {
        Self { domain, cfg }
    }

    #[inline]
    pub fn cfg(&self) -> EngineCfg {
        self.cfg
    }
}

/// Twice the signed area of `(a, b, c)`; positive for a counterclockwise turn.
#[inline]
fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Proper intersection of segments `ab` and `cd`; any near-zero orientation (shared
/// endpoint, grazing vertex, collinear overlap) counts as not crossing.
pub(crate) fn segments_cross(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
    eps: f64,
) -> bool {
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);
    if [o1, o2, o3, o4].iter().any(|o| o.abs() <= eps) {
        return false;
    }
    (o1 > 0.0) != (o2 > 0.0) && (o3 > 0.0) != (o4 > 0.0)
}

impl CrossingDetector for ContinuousDetector<'_> {
    type Pos = f64;

    fn domain(&self) -> &Domain {
        self.domain
    }

    fn check_point(&self, p: &Point<f64>) -> Result<(), StructuralError> {
        match p {
            Point::Boundary(b) => {
                self.domain.generator(b.generator)?;
                if !(0.0..=1.0).contains(&b.pos) {
                    return Err(StructuralError::ParamOutOfRange {
                        generator: b.generator,
                        param: b.pos,
                    });
                }
                Ok(())
            }
            Point::Interior(ip) => {
                let open = |x: f64| x > 0.0 && x < 1.0;
                if open(ip.south) && open(ip.east) {
                    Ok(())
                } else {
                    Err(StructuralError::InteriorOutOfRange {
                        south: ip.south,
                        east: ip.east,
                    })
                }
            }
        }
    }

    #[inline]
    fn same_position(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.cfg.eps_param
    }

    fn strictly_between(&self, x: f64, a: f64, b: f64) -> bool {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        x > lo + self.cfg.eps_param && x < hi - self.cfg.eps_param
    }

    fn same_interior(&self, a: &InteriorPoint, b: &InteriorPoint) -> bool {
        (a.south - b.south).abs() <= self.cfg.eps_param
            && (a.east - b.east).abs() <= self.cfg.eps_param
    }

    fn crosses(&self, a: &Edge<f64>, b: &Edge<f64>) -> bool {
        let d = self.domain;
        segments_cross(
            d.chord_position(&a.from),
            d.chord_position(&a.to),
            d.chord_position(&b.from),
            d.chord_position(&b.to),
            self.cfg.eps_orient,
        )
    }
}
