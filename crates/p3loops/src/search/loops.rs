//! Incremental breadth-first enumeration of closed loops.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::moves::{has_successor, successors, Move};
use crate::cfg::SameGeneratorRule;
use crate::domain::Domain;
use crate::error::StructuralError;
use crate::path::DiscretePath;
use crate::point::{Edge, Ordinal};
use crate::validate::Validator;
use crate::wallpaper::{index_of, WallpaperIndex};

/// Enumerator configuration.
#[derive(Clone, Copy, Debug)]
pub struct EnumeratorCfg {
    pub same_generator: SameGeneratorRule,
    /// Keep an open path in the frontier only if it can still move.
    pub prune: bool,
}

impl Default for EnumeratorCfg {
    fn default() -> Self {
        Self {
            same_generator: SameGeneratorRule::Literal,
            prune: true,
        }
    }
}

/// A discovered closed loop.
#[derive(Clone, Debug)]
pub struct Loop {
    path: DiscretePath,
    edges: Vec<Edge<f64>>,
    index: WallpaperIndex,
}

impl Loop {
    pub(crate) fn from_closed(domain: &Domain, path: DiscretePath) -> Result<Self, StructuralError> {
        let edges = path.to_continuous()?.edges().to_vec();
        let index = index_of(domain, path.path());
        Ok(Self { path, edges, index })
    }

    /// Edge count, closing edge included.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in parameter coordinates.
    #[inline]
    pub fn edges(&self) -> &[Edge<f64>] {
        &self.edges
    }

    #[inline]
    pub fn discrete_edges(&self) -> &[Edge<Ordinal>] {
        self.path.path().edges()
    }

    #[inline]
    pub fn path(&self) -> &DiscretePath {
        &self.path
    }

    #[inline]
    pub fn index(&self) -> WallpaperIndex {
        self.index
    }
}

/// Outcome of one `explore_next_length` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// Length of the open paths that were expanded.
    pub length: usize,
    pub new_loops: usize,
    /// Open paths left in the frontier.
    pub frontier: usize,
}

/// Loops returned by `get_loops`.
#[derive(Debug)]
pub struct LoopQuery<'a> {
    pub loops: &'a [Loop],
    /// The frontier ran empty: no further loops exist.
    pub exhausted: bool,
}

/// Resumable loop enumerator.
///
/// Every path starts with the domain's seed edge, which breaks the rotational
/// symmetry; loops are kept sorted by edge count.
#[derive(Clone, Debug)]
pub struct LoopEnumerator {
    domain: Domain,
    cfg: EnumeratorCfg,
    loops: Vec<Loop>,
    frontier: BTreeMap<usize, Vec<DiscretePath>>,
    explored: usize,
}

impl LoopEnumerator {
    pub fn new(domain: Domain, cfg: EnumeratorCfg) -> Self {
        let mut out = Self {
            domain,
            cfg,
            loops: Vec::new(),
            frontier: BTreeMap::new(),
            explored: 0,
        };
        out.reset();
        out
    }

    /// Drop all results and start again from the seed path.
    pub fn reset(&mut self) {
        self.loops.clear();
        self.frontier.clear();
        self.frontier
            .insert(1, vec![DiscretePath::seed(&self.domain)]);
        self.explored = 0;
    }

    #[inline]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    #[inline]
    pub fn cfg(&self) -> EnumeratorCfg {
        self.cfg
    }

    #[inline]
    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }

    /// Largest open-path length expanded so far.
    #[inline]
    pub fn explored_length(&self) -> usize {
        self.explored
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.values().map(Vec::len).sum()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Expand every frontier path of the smallest pending length by one edge.
    ///
    /// Returns `None` once the frontier is empty.
    pub fn explore_next_length(&mut self) -> Option<StepReport> {
        let (length, paths) = self.frontier.pop_first()?;
        let validator = Validator::discrete(&self.domain, self.cfg.same_generator);
        let mut next = Vec::new();
        let mut new_loops = 0;
        for state in &paths {
            for (mv, succ) in successors(&validator, state) {
                match mv {
                    Move::Close => match Loop::from_closed(&self.domain, succ) {
                        Ok(lp) => {
                            self.loops.push(lp);
                            new_loops += 1;
                        }
                        Err(err) => warn!(%err, "dropping loop with unregistered points"),
                    },
                    Move::Extend { .. } => {
                        if !self.cfg.prune || has_successor(&validator, &succ) {
                            next.push(succ);
                        }
                    }
                }
            }
        }
        if !next.is_empty() {
            self.frontier.entry(length + 1).or_default().extend(next);
        }
        self.explored = length;
        let report = StepReport {
            length,
            new_loops,
            frontier: self.frontier_len(),
        };
        debug!(
            length,
            expanded = paths.len(),
            new_loops,
            frontier = report.frontier,
            total_loops = self.loops.len(),
            "explored loop length"
        );
        Some(report)
    }

    /// Explore until `count` loops of at most `max_length` edges are known, longer
    /// loops would be needed, or the frontier is empty.
    pub fn get_loops(&mut self, count: usize, max_length: usize) -> LoopQuery<'_> {
        while self.loops.len() < count {
            match self.frontier.keys().next() {
                Some(&len) if len < max_length => {
                    self.explore_next_length();
                }
                _ => break,
            }
        }
        let n = self
            .loops
            .partition_point(|l| l.len() <= max_length)
            .min(count);
        LoopQuery {
            loops: &self.loops[..n],
            exhausted: self.frontier.is_empty(),
        }
    }
}
