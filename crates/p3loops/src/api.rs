//! Query surface for presentation layers.
//!
//! Thin wrappers over the engine with default configurations, plus re-exports of the
//! types they speak. Callers that need other tolerances or policies use the modules
//! directly.

pub use crate::cfg::{EngineCfg, SameGeneratorRule};
pub use crate::crossing::{ContinuousDetector, CrossingDetector, DiscreteDetector};
pub use crate::domain::{Domain, GeneratorId, Side, Symmetry};
pub use crate::error::{EngineError, RuleViolation, StructuralError};
pub use crate::path::{DiscretePath, Path};
pub use crate::point::{Edge, Ordinal, Point};
pub use crate::search::{EnumeratorCfg, Loop, LoopEnumerator, MoveTree, NodeKind, TreeCfg};
pub use crate::validate::Validator;
pub use crate::wallpaper::WallpaperIndex;

use crate::point::Position;

/// Check `candidate` as the next edge of `path`; the error carries the rule and, where
/// one exists, the offending edge index (`RuleViolation::edge_index`).
pub fn validate<D: CrossingDetector>(
    validator: &Validator<D>,
    path: &Path<D::Pos>,
    candidate: &Edge<D::Pos>,
) -> Result<(), EngineError> {
    validator.can_append(candidate, path)
}

pub fn current_continuation_point<P: Position>(domain: &Domain, path: &Path<P>) -> Option<Point<P>> {
    path.continuation(domain)
}

pub fn wallpaper_index_of<P: Position>(domain: &Domain, path: &Path<P>) -> WallpaperIndex {
    crate::wallpaper::index_of(domain, path)
}

/// Up to `count` loops of at most `max_length` edges, shortest first.
pub fn enumerate_loops(domain: &Domain, count: usize, max_length: usize) -> Vec<Loop> {
    let mut en = LoopEnumerator::new(domain.clone(), EnumeratorCfg::default());
    en.get_loops(count, max_length).loops.to_vec()
}

pub fn build_move_tree(
    domain: &Domain,
    path: &Path<f64>,
    depth: usize,
) -> Result<MoveTree, EngineError> {
    MoveTree::build(domain, path, depth, TreeCfg::default())
}
