//! Error categories shared by the engine.
//!
//! - `StructuralError`: malformed input (unknown generator, out-of-range position,
//!   invalid domain). A programmer error; validated UI input never produces one.
//! - `RuleViolation`: an admissibility rule rejected an edit. Expected and recoverable;
//!   carries the offending edge index where one exists so callers can highlight it.
//! - `EngineError`: either of the above, returned by validator entry points.
//!
//! Search exhaustion is not an error; searches report it through flags and counts.

use std::fmt;

use crate::domain::GeneratorId;

/// Malformed point, edge, or domain configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum StructuralError {
    UnknownGenerator(GeneratorId),
    ParamOutOfRange {
        generator: GeneratorId,
        param: f64,
    },
    InteriorOutOfRange {
        south: f64,
        east: f64,
    },
    /// Interior points only exist in the continuous representation.
    InteriorUnsupported,
    OrdinalOutOfRange {
        group: GeneratorId,
        ordinal: usize,
        len: usize,
    },
    /// A registered parameter would break the sorted order of its group.
    ParamOutOfOrder {
        group: GeneratorId,
        ordinal: usize,
        param: f64,
    },
    InvalidDomain {
        reason: String,
    },
}

impl StructuralError {
    pub(crate) fn invalid_domain(reason: impl Into<String>) -> Self {
        Self::InvalidDomain {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGenerator(g) => write!(f, "unknown generator {}", g.0),
            Self::ParamOutOfRange { generator, param } => {
                write!(f, "parameter {param} on generator {} outside [0, 1]", generator.0)
            }
            Self::InteriorOutOfRange { south, east } => {
                write!(f, "interior point ({south}, {east}) outside the open unit square")
            }
            Self::InteriorUnsupported => {
                write!(f, "interior points are not supported by the discrete representation")
            }
            Self::OrdinalOutOfRange {
                group,
                ordinal,
                len,
            } => write!(
                f,
                "ordinal {ordinal} out of range for group {} holding {len} points",
                group.0
            ),
            Self::ParamOutOfOrder {
                group,
                ordinal,
                param,
            } => write!(
                f,
                "parameter {param} does not fit ordinal {ordinal} of group {}",
                group.0
            ),
            Self::InvalidDomain { reason } => write!(f, "invalid domain: {reason}"),
        }
    }
}

impl std::error::Error for StructuralError {}

/// Reason an edit was declined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleViolation {
    /// Both endpoints denote the same point (identification aware).
    Degenerate,
    /// Both endpoints lie on the same generator (or, under the group rule, on a pair).
    SameGenerator,
    /// The edge does not start at the path's continuation point.
    ChainMismatch,
    /// The edge ends on a point already used by edge `index`.
    Revisit { index: usize },
    /// The edge crosses edge `index`.
    Crossing { index: usize },
    /// The path is closed; undo the closing edge first.
    PathClosed,
    /// Closing needs at least two edges.
    TooShort { len: usize },
    /// Closing needs boundary endpoints at both ends of the path.
    InteriorEndpoint,
    /// The continuation point is not on the first point's generator or its partner.
    OffClosingGroup,
    /// Closing would trap a point of edge `index` outside the loop.
    Trapped { index: usize },
    EmptyPath,
}

impl RuleViolation {
    /// Index of the existing edge that caused the rejection, if any.
    pub fn edge_index(&self) -> Option<usize> {
        match *self {
            Self::Revisit { index } | Self::Crossing { index } | Self::Trapped { index } => {
                Some(index)
            }
            _ => None,
        }
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate => write!(f, "degenerate edge"),
            Self::SameGenerator => write!(f, "edge stays on one generator"),
            Self::ChainMismatch => write!(f, "edge does not start at the continuation point"),
            Self::Revisit { index } => write!(f, "edge revisits a point of edge {index}"),
            Self::Crossing { index } => write!(f, "edge crosses edge {index}"),
            Self::PathClosed => write!(f, "path is closed"),
            Self::TooShort { len } => write!(f, "cannot close a path of {len} edges"),
            Self::InteriorEndpoint => write!(f, "path ends in the interior"),
            Self::OffClosingGroup => {
                write!(f, "continuation point is not on the starting generator pair")
            }
            Self::Trapped { index } => write!(f, "closing would trap a point of edge {index}"),
            Self::EmptyPath => write!(f, "path is empty"),
        }
    }
}

impl std::error::Error for RuleViolation {}

/// Error returned by validator entry points.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    Structural(StructuralError),
    Rule(RuleViolation),
}

impl EngineError {
    pub fn rule(&self) -> Option<RuleViolation> {
        match self {
            Self::Rule(v) => Some(*v),
            Self::Structural(_) => None,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural(e) => write!(f, "structural error: {e}"),
            Self::Rule(v) => write!(f, "rule violation: {v}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Structural(e) => Some(e),
            Self::Rule(v) => Some(v),
        }
    }
}

impl From<StructuralError> for EngineError {
    fn from(e: StructuralError) -> Self {
        Self::Structural(e)
    }
}

impl From<RuleViolation> for EngineError {
    fn from(v: RuleViolation) -> Self {
        Self::Rule(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_index_only_for_indexed_rules() {
        assert_eq!(RuleViolation::Crossing { index: 3 }.edge_index(), Some(3));
        assert_eq!(RuleViolation::Trapped { index: 0 }.edge_index(), Some(0));
        assert_eq!(RuleViolation::Degenerate.edge_index(), None);
    }

    #[test]
    fn engine_error_wraps_both_categories() {
        let e: EngineError = RuleViolation::ChainMismatch.into();
        assert_eq!(e.rule(), Some(RuleViolation::ChainMismatch));
        let s: EngineError = StructuralError::InteriorUnsupported.into();
        assert!(s.rule().is_none());
        assert!(s.to_string().starts_with("structural error"));
    }
}
