//! Paths: owned edge lists with tail-only edits.
//!
//! - `Path<P>`: the chained edge list in either representation; edits go through a
//!   `Validator` (`append`, `close`) or undo the last edge (`remove_last`).
//! - `DiscretePath`: an ordinal path together with the `Registry` that gives its
//!   ordinals meaning. Registering a point re-indexes the path so that every edge keeps
//!   denoting the same positions.

use crate::crossing::CrossingDetector;
use crate::domain::{Domain, GeneratorId, Registry};
use crate::error::{EngineError, StructuralError};
use crate::point::{Edge, Ordinal, Point, Position};
use crate::validate::Validator;

#[derive(Clone, Debug, PartialEq)]
pub struct Path<P> {
    edges: Vec<Edge<P>>,
    closed: bool,
}

impl<P: Position> Default for Path<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Position> Path<P> {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            closed: false,
        }
    }

    /// Open path from edges without validation; see `Validator::validate_path`.
    pub fn from_edges(edges: Vec<Edge<P>>) -> Self {
        Self {
            edges,
            closed: false,
        }
    }

    #[inline]
    pub fn edges(&self) -> &[Edge<P>] {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn last(&self) -> Option<&Edge<P>> {
        self.edges.last()
    }

    pub fn first_point(&self) -> Option<Point<P>> {
        self.edges.first().map(|e| e.from)
    }

    /// `from` of every edge, followed by the final `to`.
    pub fn points(&self) -> Vec<Point<P>> {
        let mut out: Vec<Point<P>> = self.edges.iter().map(|e| e.from).collect();
        if let Some(e) = self.edges.last() {
            out.push(e.to);
        }
        out
    }

    /// Where the next edge must start; `None` for empty or closed paths.
    pub fn continuation(&self, domain: &Domain) -> Option<Point<P>> {
        if self.closed {
            return None;
        }
        self.edges.last().map(|e| domain.continuation(&e.to))
    }

    /// Validated append.
    pub fn append<D>(&mut self, validator: &Validator<D>, edge: Edge<P>) -> Result<(), EngineError>
    where
        D: CrossingDetector<Pos = P>,
    {
        validator.can_append(&edge, self)?;
        self.edges.push(edge);
        Ok(())
    }

    /// Undo the last edit; removing the closing edge re-opens the path.
    pub fn remove_last(&mut self) -> Option<Edge<P>> {
        let e = self.edges.pop()?;
        self.closed = false;
        Some(e)
    }

    /// Close the path with the synthesised closing edge, returning a copy of it.
    pub fn close<D>(&mut self, validator: &Validator<D>) -> Result<Edge<P>, EngineError>
    where
        D: CrossingDetector<Pos = P>,
    {
        let edge = validator.can_close(self)?;
        self.edges.push(edge);
        self.closed = true;
        Ok(edge)
    }

    pub(crate) fn push_unchecked(&mut self, edge: Edge<P>) {
        self.edges.push(edge);
    }

    pub(crate) fn close_unchecked(&mut self) {
        self.closed = true;
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [Edge<P>] {
        &mut self.edges
    }
}

/// Ordinal path plus its point registry.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscretePath {
    path: Path<Ordinal>,
    registry: Registry,
}

impl DiscretePath {
    pub fn new(domain: &Domain) -> Self {
        Self {
            path: Path::new(),
            registry: Registry::new(domain),
        }
    }

    /// Length-1 path along the domain's seed generators, both points at parameter 1/2.
    pub fn seed(domain: &Domain) -> Self {
        let (a, b) = domain.seed_generators();
        let registry = Registry::seeded(domain, &[(a, 0.5), (b, 0.5)]);
        let mut path = Path::new();
        path.push_unchecked(Edge::new(
            Point::boundary(a, Ordinal(0)),
            Point::boundary(b, Ordinal(0)),
        ));
        Self { path, registry }
    }

    /// Register every boundary point of a continuous path (merging parameters within
    /// `eps` on one group) and translate the edges to ordinals.
    pub fn from_continuous(
        domain: &Domain,
        path: &Path<f64>,
        eps: f64,
    ) -> Result<Self, StructuralError> {
        let mut params: Vec<(GeneratorId, f64)> = Vec::with_capacity(2 * path.len());
        for e in path.edges() {
            for p in [&e.from, &e.to] {
                match p {
                    Point::Boundary(b) => params.push((b.generator, b.pos)),
                    Point::Interior(_) => return Err(StructuralError::InteriorUnsupported),
                }
            }
        }
        let registry = Registry::from_params(domain, &params, eps)?;
        let to_ordinal = |p: &Point<f64>| -> Result<Point<Ordinal>, StructuralError> {
            let b = p.as_boundary().ok_or(StructuralError::InteriorUnsupported)?;
            let k = registry.ordinal_of(b.generator, b.pos, eps).ok_or(
                StructuralError::ParamOutOfRange {
                    generator: b.generator,
                    param: b.pos,
                },
            )?;
            Ok(Point::boundary(b.generator, k))
        };
        let mut edges = Vec::with_capacity(path.len());
        for e in path.edges() {
            edges.push(Edge::new(to_ordinal(&e.from)?, to_ordinal(&e.to)?));
        }
        let mut out = Path::from_edges(edges);
        if path.is_closed() {
            out.close_unchecked();
        }
        Ok(Self {
            path: out,
            registry,
        })
    }

    #[inline]
    pub fn path(&self) -> &Path<Ordinal> {
        &self.path
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub(crate) fn path_mut(&mut self) -> &mut Path<Ordinal> {
        &mut self.path
    }

    pub fn continuous_point(&self, p: &Point<Ordinal>) -> Result<Point<f64>, StructuralError> {
        match p {
            Point::Boundary(b) => {
                let group = self.registry.group_of(b.generator)?;
                let param =
                    self.registry
                        .param(b.generator, b.pos)
                        .ok_or(StructuralError::OrdinalOutOfRange {
                            group,
                            ordinal: b.pos.0,
                            len: self.registry.len(b.generator),
                        })?;
                Ok(Point::boundary(b.generator, param))
            }
            Point::Interior(_) => Err(StructuralError::InteriorUnsupported),
        }
    }

    pub fn continuous_edge(&self, e: &Edge<Ordinal>) -> Result<Edge<f64>, StructuralError> {
        Ok(Edge::new(
            self.continuous_point(&e.from)?,
            self.continuous_point(&e.to)?,
        ))
    }

    /// The same path in parameter coordinates.
    pub fn to_continuous(&self) -> Result<Path<f64>, StructuralError> {
        let edges = self
            .path
            .edges()
            .iter()
            .map(|e| self.continuous_edge(e))
            .collect::<Result<Vec<_>, _>>()?;
        let mut out = Path::from_edges(edges);
        if self.path.is_closed() {
            out.close_unchecked();
        }
        Ok(out)
    }

    /// Register `param` at `ordinal` of `group` and shift the path's later ordinals.
    pub fn insert_point(
        &mut self,
        group: GeneratorId,
        ordinal: Ordinal,
        param: f64,
    ) -> Result<(), StructuralError> {
        self.registry.insert_point(group, ordinal, param)?;
        let canon = self.registry.group_of(group)?;
        let registry = &self.registry;
        let shift = |p: &mut Point<Ordinal>| {
            if let Point::Boundary(b) = p {
                if registry.group_of(b.generator).ok() == Some(canon) && b.pos >= ordinal {
                    b.pos = Ordinal(b.pos.0 + 1);
                }
            }
        };
        for e in self.path.edges_mut() {
            shift(&mut e.from);
            shift(&mut e.to);
        }
        Ok(())
    }

    /// Place a new point on `generator` at the midpoint of gap `gap` (the slot before
    /// ordinal `gap`) and return it.
    pub fn place_in_gap(
        &mut self,
        generator: GeneratorId,
        gap: usize,
    ) -> Result<Point<Ordinal>, StructuralError> {
        let group = self.registry.group_of(generator)?;
        let param = self
            .registry
            .gap_param(generator, gap)
            .ok_or(StructuralError::OrdinalOutOfRange {
                group,
                ordinal: gap,
                len: self.registry.len(generator),
            })?;
        self.insert_point(generator, Ordinal(gap), param)?;
        Ok(Point::boundary(generator, Ordinal(gap)))
    }
}
