//! Path engine for chord loops on a glued square.
//!
//! The fundamental domain is the unit square whose boundary generators are glued in
//! pairs by a wallpaper symmetry (quarter turns or half turns). A path is a chain of
//! chords: each edge starts where the previous one left the square, re-entering through
//! the glued partner. The engine decides which edits keep a path non-crossing, tracks
//! which tiled copy of the square the path ends in, and searches the space of closed
//! loops.
//!
//! Modules, leaves first
//! - `domain`: generators, identification, embeddings, discrete point registry.
//! - `crossing`: continuous (epsilon) and discrete (exact) crossing predicates.
//! - `validate`: append and close rules, generic over the crossing strategy.
//! - `path`: owned edge lists in either representation.
//! - `wallpaper`: index algebra and rendering frames.
//! - `search`: loop enumeration and move trees; `walk`: seeded random walks.
//! - `notation`: text form of points, edges, and paths.
//!
//! API Policy
//! - `api` is the query surface for callers; everything else may change freely.

pub mod api;
pub mod cfg;
pub mod crossing;
pub mod domain;
pub mod error;
pub mod frame;
pub mod notation;
pub mod path;
pub mod point;
pub mod search;
pub mod validate;
pub mod walk;
pub mod wallpaper;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{EngineCfg, SameGeneratorRule};
pub use error::{EngineError, RuleViolation, StructuralError};

/// Common imports for callers.
pub mod prelude {
    pub use crate::cfg::{EngineCfg, SameGeneratorRule};
    pub use crate::crossing::{ContinuousDetector, CrossingDetector, DiscreteDetector};
    pub use crate::domain::{Domain, GeneratorId, Side, Symmetry};
    pub use crate::path::{DiscretePath, Path};
    pub use crate::point::{Edge, Ordinal, Point};
    pub use crate::search::{EnumeratorCfg, LoopEnumerator, MoveTree, TreeCfg};
    pub use crate::validate::Validator;
    pub use crate::walk::{random_walk, ReplayToken};
    pub use crate::wallpaper::WallpaperIndex;
}
