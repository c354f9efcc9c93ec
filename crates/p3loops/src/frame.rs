//! Rigid motions of the plane used as rendering frames.
//!
//! A frame places a copy of the fundamental domain in the unfolded plane:
//! `x ↦ M x + t` with `M` a rotation. Gluing motions of generators and the frames
//! of wallpaper indices are both frames, so index bookkeeping can be checked
//! against plain composition.

use nalgebra::{Matrix2, Vector2};

/// 2D rigid motion: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Frame {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    /// Counterclockwise rotation by `n` quarter turns about the origin (exact entries).
    pub fn quarter_turns(n: u8) -> Self {
        let m = match n % 4 {
            0 => Matrix2::new(1.0, 0.0, 0.0, 1.0),
            1 => Matrix2::new(0.0, -1.0, 1.0, 0.0),
            2 => Matrix2::new(-1.0, 0.0, 0.0, -1.0),
            _ => Matrix2::new(0.0, 1.0, -1.0, 0.0),
        };
        Self {
            m,
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn translation(t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }

    /// Composition `self ∘ other`.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }

    /// Inverse motion; rotations are orthogonal so no solve is needed.
    #[inline]
    pub fn inverse(&self) -> Self {
        let mt = self.m.transpose();
        Self { m: mt, t: -mt * self.t }
    }

    /// Max-abs comparison of matrix and translation entries.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        (self.m - other.m).amax() <= eps && (self.t - other.t).amax() <= eps
    }

    /// Orientation-preserving isometry carrying segment `a0→a1` onto `b0→b1`.
    ///
    /// Returns `None` when the segments have different lengths or are degenerate.
    pub fn carrying(
        a0: Vector2<f64>,
        a1: Vector2<f64>,
        b0: Vector2<f64>,
        b1: Vector2<f64>,
    ) -> Option<Self> {
        let da = a1 - a0;
        let db = b1 - b0;
        let (la, lb) = (da.norm(), db.norm());
        if la <= 1e-12 || (la - lb).abs() > 1e-9 {
            return None;
        }
        let theta = db.y.atan2(db.x) - da.y.atan2(da.x);
        let (s, c) = theta.sin_cos();
        let m = Matrix2::new(snap(c), -snap(s), snap(s), snap(c));
        Some(Self { m, t: b0 - m * a0 })
    }
}

/// Snap trigonometric noise so quarter-turn motions come out exact.
#[inline]
fn snap(x: f64) -> f64 {
    let r = x.round();
    if (x - r).abs() < 1e-12 {
        r
    } else {
        x
    }
}
