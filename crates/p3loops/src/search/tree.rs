//! Bounded-depth move trees.
//!
//! Nodes are decision points. Forced runs (exactly one admissible move) are absorbed
//! into the current node without consuming depth; a node with two or more moves
//! branches, and each child consumes one depth unit. At depth zero a decision point
//! stays unexpanded, so any root-to-leaf path crosses at most `depth` branch nodes.

use tracing::debug;

use super::moves::{successors, Move};
use crate::cfg::SameGeneratorRule;
use crate::crossing::DiscreteDetector;
use crate::domain::Domain;
use crate::error::{EngineError, RuleViolation, StructuralError};
use crate::path::{DiscretePath, Path};
use crate::point::Edge;
use crate::validate::Validator;
use crate::wallpaper::{index_of, WallpaperIndex};

/// Tree builder configuration.
#[derive(Clone, Copy, Debug)]
pub struct TreeCfg {
    pub same_generator: SameGeneratorRule,
    /// Parameters closer than this merge when the input path is registered.
    pub eps_param: f64,
    /// Longest forced run absorbed into one node; longer runs stop unexpanded.
    pub max_forced: usize,
}

impl Default for TreeCfg {
    fn default() -> Self {
        Self {
            same_generator: SameGeneratorRule::Literal,
            eps_param: 1e-9,
            max_forced: 256,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Branch(Vec<NodeId>),
    /// No admissible move.
    DeadEnd,
    /// The node's last edge closed the loop.
    Closed { index: WallpaperIndex },
    /// Depth (or forced-run) budget ran out with `choices` moves available.
    Unexpanded { choices: usize },
}

#[derive(Clone, Debug)]
pub struct Node {
    pub parent: Option<NodeId>,
    /// Move that led here from the parent; `None` at the root.
    pub choice: Option<Move>,
    /// The chosen edge followed by the forced edges, in parameter coordinates.
    pub edges: Vec<Edge<f64>>,
    pub kind: NodeKind,
}

#[derive(Clone, Debug)]
pub struct MoveTree {
    nodes: Vec<Node>,
}

impl MoveTree {
    /// Build the tree of continuations of `path` with `depth` decisions.
    pub fn build(
        domain: &Domain,
        path: &Path<f64>,
        depth: usize,
        cfg: TreeCfg,
    ) -> Result<Self, EngineError> {
        if path.is_empty() {
            return Err(RuleViolation::EmptyPath.into());
        }
        if path.is_closed() {
            return Err(RuleViolation::PathClosed.into());
        }
        let state = DiscretePath::from_continuous(domain, path, cfg.eps_param)?;
        let mut b = TreeBuilder {
            domain,
            validator: Validator::discrete(domain, cfg.same_generator),
            cfg,
            nodes: Vec::new(),
        };
        b.expand(state, None, None, depth)?;
        let tree = Self { nodes: b.nodes };
        debug!(
            depth,
            nodes = tree.len(),
            closed = tree.closed_leaves(),
            "built move tree"
        );
        Ok(tree)
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.node(id).kind {
            NodeKind::Branch(c) => c.as_slice(),
            _ => &[],
        }
    }

    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| !matches!(n.kind, NodeKind::Branch(_)))
            .map(|(i, _)| NodeId(i))
    }

    /// Number of branch nodes strictly above `id`.
    pub fn branch_depth(&self, id: NodeId) -> usize {
        let mut count = 0;
        let mut cur = self.node(id).parent;
        while let Some(p) = cur {
            if matches!(self.node(p).kind, NodeKind::Branch(_)) {
                count += 1;
            }
            cur = self.node(p).parent;
        }
        count
    }

    pub fn closed_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Closed { .. }))
            .count()
    }

    /// Edges added between the root path and the end of node `id`.
    pub fn edges_to(&self, id: NodeId) -> Vec<Edge<f64>> {
        let mut chain = vec![id];
        let mut cur = self.node(id).parent;
        while let Some(p) = cur {
            chain.push(p);
            cur = self.node(p).parent;
        }
        chain
            .iter()
            .rev()
            .flat_map(|n| self.node(*n).edges.iter().copied())
            .collect()
    }
}

struct TreeBuilder<'a> {
    domain: &'a Domain,
    validator: Validator<DiscreteDetector<'a>>,
    cfg: TreeCfg,
    nodes: Vec<Node>,
}

impl TreeBuilder<'_> {
    fn last_edge(state: &DiscretePath) -> Result<Option<Edge<f64>>, StructuralError> {
        state
            .path()
            .last()
            .map(|e| state.continuous_edge(e))
            .transpose()
    }

    fn expand(
        &mut self,
        mut state: DiscretePath,
        parent: Option<NodeId>,
        choice: Option<Move>,
        depth: usize,
    ) -> Result<NodeId, StructuralError> {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            choice,
            edges: Vec::new(),
            kind: NodeKind::DeadEnd,
        });
        let mut edges = Vec::new();
        if choice.is_some() {
            edges.extend(Self::last_edge(&state)?);
        }
        let mut forced = 0;
        let kind = loop {
            if state.path().is_closed() {
                break NodeKind::Closed {
                    index: index_of(self.domain, state.path()),
                };
            }
            let mut succ = successors(&self.validator, &state);
            match succ.len() {
                0 => break NodeKind::DeadEnd,
                1 => {
                    if forced >= self.cfg.max_forced {
                        break NodeKind::Unexpanded { choices: 1 };
                    }
                    let Some((_, next)) = succ.pop() else {
                        break NodeKind::DeadEnd;
                    };
                    state = next;
                    edges.extend(Self::last_edge(&state)?);
                    forced += 1;
                }
                n if depth == 0 => break NodeKind::Unexpanded { choices: n },
                n => {
                    let mut children = Vec::with_capacity(n);
                    for (mv, next) in succ {
                        children.push(self.expand(next, Some(id), Some(mv), depth - 1)?);
                    }
                    break NodeKind::Branch(children);
                }
            }
        };
        let node = &mut self.nodes[id.0];
        node.edges = edges;
        node.kind = kind;
        Ok(id)
    }
}
