//! Candidate moves on a discrete path.
//!
//! A move either extends the path with one new point, placed in a maximal gap of a
//! generator's point list, or closes it. Gaps are the only combinatorially distinct
//! places for a new point, so extending once per gap covers every continuation.

use std::fmt;

use tracing::trace;

use crate::crossing::DiscreteDetector;
use crate::domain::GeneratorId;
use crate::error::{EngineError, RuleViolation};
use crate::path::DiscretePath;
use crate::point::Edge;
use crate::validate::Validator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// New edge from the continuation point to a new point on `generator`, in the gap
    /// before ordinal `gap`.
    Extend { generator: GeneratorId, gap: usize },
    Close,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Extend { generator, gap } => write!(f, "extend g{} gap {gap}", generator.0),
            Move::Close => write!(f, "close"),
        }
    }
}

/// Every extension (one per generator and gap) followed by `Close`.
pub fn candidate_moves(state: &DiscretePath, generators: usize) -> Vec<Move> {
    let mut out = Vec::new();
    for g in (0..generators).map(GeneratorId) {
        for gap in 0..=state.registry().len(g) {
            out.push(Move::Extend { generator: g, gap });
        }
    }
    out.push(Move::Close);
    out
}

/// Apply `mv` to a copy of `state`.
pub fn apply(
    validator: &Validator<DiscreteDetector<'_>>,
    state: &DiscretePath,
    mv: Move,
) -> Result<DiscretePath, EngineError> {
    let mut next = state.clone();
    match mv {
        Move::Close => {
            next.path_mut().close(validator)?;
        }
        Move::Extend { generator, gap } => {
            if state.path().is_closed() {
                return Err(RuleViolation::PathClosed.into());
            }
            let to = next.place_in_gap(generator, gap)?;
            let from = next
                .path()
                .continuation(validator.domain())
                .ok_or(RuleViolation::EmptyPath)?;
            next.path_mut().append(validator, Edge::new(from, to))?;
        }
    }
    Ok(next)
}

/// Admissible moves from `state` with their results.
pub fn successors(
    validator: &Validator<DiscreteDetector<'_>>,
    state: &DiscretePath,
) -> Vec<(Move, DiscretePath)> {
    candidate_moves(state, validator.domain().len())
        .into_iter()
        .filter_map(|mv| match apply(validator, state, mv) {
            Ok(next) => Some((mv, next)),
            Err(err) => {
                trace!(%mv, %err, "move rejected");
                None
            }
        })
        .collect()
}

/// Admissible extensions only (no closing).
pub fn extensions(
    validator: &Validator<DiscreteDetector<'_>>,
    state: &DiscretePath,
) -> Vec<(Move, DiscretePath)> {
    candidate_moves(state, validator.domain().len())
        .into_iter()
        .filter(|mv| *mv != Move::Close)
        .filter_map(|mv| apply(validator, state, mv).ok().map(|next| (mv, next)))
        .collect()
}

/// Whether any move (extension or closing) is admissible.
pub fn has_successor(validator: &Validator<DiscreteDetector<'_>>, state: &DiscretePath) -> bool {
    validator.can_close(state.path()).is_ok()
        || candidate_moves(state, validator.domain().len())
            .into_iter()
            .filter(|mv| *mv != Move::Close)
            .any(|mv| apply(validator, state, mv).is_ok())
}
