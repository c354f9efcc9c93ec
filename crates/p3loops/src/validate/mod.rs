//! Admissibility of path edits.
//!
//! Purpose
//! - Decide whether a candidate edge may be appended to a path, and whether (and
//!   with which synthesised edge) a path may be closed into a loop.
//!
//! Why this design
//! - The validator is generic over a `CrossingDetector`, so the continuous editor and
//!   the discrete search share the exact same rule order. All tolerance handling sits
//!   in the detector.
//!
//! Rule order for `can_append` (first failure wins)
//! 1. structural checks on both endpoints (`EngineError::Structural`);
//! 2. the path is open (`PathClosed`);
//! 3. `Degenerate`: both endpoints denote one point;
//! 4. `SameGenerator`: both endpoints on one generator (see `SameGeneratorRule`);
//! 5. `ChainMismatch`: the edge does not start at the continuation point;
//! 6. `Revisit`: the edge ends on a point the path already uses;
//! 7. `Crossing`: the edge crosses an existing edge.
//!
//! Code cross-refs: `crate::crossing::CrossingDetector`, `crate::path::Path`.

use crate::cfg::{EngineCfg, SameGeneratorRule};
use crate::crossing::{ContinuousDetector, CrossingDetector, DiscreteDetector};
use crate::domain::Domain;
use crate::error::{EngineError, RuleViolation};
use crate::path::Path;
use crate::point::{Edge, Point};

/// Rule checker bound to one detector strategy.
#[derive(Clone, Copy, Debug)]
pub struct Validator<D> {
    detector: D,
    rule: SameGeneratorRule,
}

impl<'a> Validator<ContinuousDetector<'a>> {
    /// Continuous validator; the same-generator policy comes from `cfg`.
    pub fn continuous(domain: &'a Domain, cfg: EngineCfg) -> Self {
        Self::new(ContinuousDetector::new(domain, cfg), cfg.same_generator)
    }
}

impl<'a> Validator<DiscreteDetector<'a>> {
    pub fn discrete(domain: &'a Domain, rule: SameGeneratorRule) -> Self {
        Self::new(DiscreteDetector::new(domain), rule)
    }
}

impl<D: CrossingDetector> Validator<D> {
    pub fn new(detector: D, rule: SameGeneratorRule) -> Self {
        Self { detector, rule }
    }

    #[inline]
    pub fn detector(&self) -> &D {
        &self.detector
    }

    #[inline]
    pub fn domain(&self) -> &Domain {
        self.detector.domain()
    }

    #[inline]
    pub fn rule(&self) -> SameGeneratorRule {
        self.rule
    }

    fn stays_on_generator(&self, edge: &Edge<D::Pos>) -> bool {
        match (self.rule, edge.from.generator(), edge.to.generator()) {
            (SameGeneratorRule::Literal, _, _) => edge.is_same_generator(),
            (SameGeneratorRule::Group, Some(a), Some(b)) => self.domain().same_group(a, b),
            (SameGeneratorRule::Group, _, _) => false,
        }
    }

    /// Check `edge` as the next edge of `path`. Pure.
    pub fn can_append(&self, edge: &Edge<D::Pos>, path: &Path<D::Pos>) -> Result<(), EngineError> {
        let det = &self.detector;
        det.check_point(&edge.from)?;
        det.check_point(&edge.to)?;
        if path.is_closed() {
            return Err(RuleViolation::PathClosed.into());
        }
        if det.points_equal(&edge.from, &edge.to) {
            return Err(RuleViolation::Degenerate.into());
        }
        if self.stays_on_generator(edge) {
            return Err(RuleViolation::SameGenerator.into());
        }
        if let Some(c) = path.continuation(self.domain()) {
            if !det.points_equal(&c, &edge.from) {
                return Err(RuleViolation::ChainMismatch.into());
            }
        }
        let revisit = path
            .edges()
            .iter()
            .position(|e| det.points_equal(&edge.to, &e.from) || det.points_equal(&edge.to, &e.to));
        if let Some(index) = revisit {
            return Err(RuleViolation::Revisit { index }.into());
        }
        if let Some(index) = det.first_crossing(edge, path.edges()) {
            return Err(RuleViolation::Crossing { index }.into());
        }
        Ok(())
    }

    /// Closing edge for `path`, drawn along the first point's literal generator from
    /// the continuation point back to the first point.
    ///
    /// This is the one edit allowed to end on an existing point and to stay on one
    /// generator; it needs no crossing test because no path point lies strictly
    /// between its endpoints on that group.
    pub fn can_close(&self, path: &Path<D::Pos>) -> Result<Edge<D::Pos>, EngineError> {
        if path.is_closed() {
            return Err(RuleViolation::PathClosed.into());
        }
        if path.len() < 2 {
            return Err(RuleViolation::TooShort { len: path.len() }.into());
        }
        let (Some(Point::Boundary(first)), Some(Point::Boundary(cont))) =
            (path.first_point(), path.continuation(self.domain()))
        else {
            return Err(RuleViolation::InteriorEndpoint.into());
        };
        let domain = self.domain();
        if !domain.same_group(cont.generator, first.generator) {
            return Err(RuleViolation::OffClosingGroup.into());
        }
        let det = &self.detector;
        if det.same_position(cont.pos, first.pos) {
            return Err(RuleViolation::Degenerate.into());
        }
        for (index, e) in path.edges().iter().enumerate() {
            let trapped = [&e.from, &e.to].into_iter().any(|p| match p {
                Point::Boundary(b) => {
                    domain.same_group(b.generator, first.generator)
                        && det.strictly_between(b.pos, cont.pos, first.pos)
                }
                Point::Interior(_) => false,
            });
            if trapped {
                return Err(RuleViolation::Trapped { index }.into());
            }
        }
        Ok(Edge::new(
            Point::boundary(first.generator, cont.pos),
            Point::Boundary(first),
        ))
    }

    /// Whether `edge` is the closing edge `can_close` would draw for `path`.
    pub fn is_closing_edge(&self, path: &Path<D::Pos>, edge: &Edge<D::Pos>) -> bool {
        self.can_close(path).is_ok_and(|c| {
            self.detector.points_equal(&c.from, &edge.from)
                && self.detector.points_equal(&c.to, &edge.to)
        })
    }

    /// Replay `edges` from an empty path, returning the first failing edge index.
    ///
    /// A final edge that fails to append but matches the closing edge of the path
    /// before it closes the path instead.
    pub fn validate_path(
        &self,
        edges: &[Edge<D::Pos>],
    ) -> Result<Path<D::Pos>, (usize, EngineError)> {
        let mut path = Path::new();
        for (i, edge) in edges.iter().enumerate() {
            match self.can_append(edge, &path) {
                Ok(()) => path.push_unchecked(*edge),
                Err(err) => {
                    let closes = i + 1 == edges.len() && self.is_closing_edge(&path, edge);
                    if !closes {
                        return Err((i, err));
                    }
                    path.push_unchecked(*edge);
                    path.close_unchecked();
                }
            }
        }
        Ok(path)
    }
}
