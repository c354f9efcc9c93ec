//! Combinatorial search over discrete paths.
//!
//! Purpose
//! - Enumerate closed loops incrementally (`loops`) and build bounded lookahead trees of
//!   continuations (`tree`). Both run on `DiscretePath`s with the exact discrete
//!   detector and share the move generator in `moves`.
//!
//! Why this design
//! - A new point only matters through the gap it falls into, so the search places
//!   points at gap midpoints and never needs continuous coordinates. Every candidate
//!   is checked by the same `Validator` the editor uses.
//! - Search state is owned by the caller (`LoopEnumerator`, `MoveTree`); stopping is
//!   simply not calling the next step.
//!
//! Code cross-refs: `crate::path::DiscretePath`, `crate::validate::Validator`,
//! `crate::wallpaper::index_of`.

pub mod loops;
pub mod moves;
pub mod tree;

pub use loops::{EnumeratorCfg, Loop, LoopEnumerator, LoopQuery, StepReport};
pub use moves::{apply, candidate_moves, extensions, has_successor, successors, Move};
pub use tree::{MoveTree, Node, NodeId, NodeKind, TreeCfg};

#[cfg(test)]
mod tests;
