use std::collections::HashSet;

use super::*;
use crate::cfg::{EngineCfg, SameGeneratorRule};
use crate::crossing::{is_noncrossing_path, ContinuousDetector, DiscreteDetector};
use crate::domain::{Domain, GeneratorId, Side};
use crate::error::RuleViolation;
use crate::path::{DiscretePath, Path};
use crate::point::{Edge, Ordinal, Point};
use crate::validate::Validator;
use crate::wallpaper::WallpaperIndex;

fn square() -> Domain {
    Domain::quarter_turn_square().unwrap()
}

/// Hashable combinatorial key of an ordinal edge list.
fn key(edges: &[Edge<Ordinal>]) -> Vec<(usize, usize, usize, usize)> {
    let p = |pt: &Point<Ordinal>| match pt {
        Point::Boundary(b) => (b.generator.0, b.pos.0),
        Point::Interior(_) => (usize::MAX, usize::MAX),
    };
    edges
        .iter()
        .map(|e| {
            let (a, i) = p(&e.from);
            let (b, j) = p(&e.to);
            (a, i, b, j)
        })
        .collect()
}

#[test]
fn seed_has_exactly_two_continuations() {
    let d = square();
    let v = Validator::discrete(&d, SameGeneratorRule::Literal);
    let seed = DiscretePath::seed(&d);
    let moves: Vec<Move> = successors(&v, &seed).into_iter().map(|(m, _)| m).collect();
    assert_eq!(
        moves,
        vec![
            Move::Extend {
                generator: GeneratorId(0),
                gap: 0
            },
            Move::Extend {
                generator: GeneratorId(2),
                gap: 1
            },
        ]
    );
    assert!(has_successor(&v, &seed));
    assert_eq!(
        apply(&v, &seed, Move::Close).unwrap_err().rule(),
        Some(RuleViolation::TooShort { len: 1 })
    );
    assert_eq!(candidate_moves(&seed, d.len()).len(), 9);
}

#[test]
fn shortest_loop_on_the_square() {
    let d = square();
    let mut en = LoopEnumerator::new(d.clone(), EnumeratorCfg::default());
    let q = en.get_loops(10, 3);
    assert_eq!(q.loops.len(), 1);
    let lp = &q.loops[0];
    assert_eq!(lp.len(), 3);
    // Crosses at north, then at west; the closing edge runs along north.
    assert_eq!(lp.index(), WallpaperIndex::new(0, 1, 0));
    let n = d.find(Side::North, 0).unwrap();
    let w = d.find(Side::West, 0).unwrap();
    assert_eq!(lp.edges()[1].from, Point::boundary(w, 0.5));
    assert_eq!(lp.edges()[1].to, Point::boundary(n, 0.25));
    assert_eq!(lp.edges()[2].from, Point::boundary(n, 0.25));
    assert_eq!(lp.edges()[2].to, Point::boundary(n, 0.5));
}

#[test]
fn loops_are_canonical_distinct_and_valid() {
    let d = square();
    let mut en = LoopEnumerator::new(d.clone(), EnumeratorCfg::default());
    let loops = en.get_loops(usize::MAX, 5).loops.to_vec();
    assert!(!loops.is_empty());
    let seed = DiscretePath::seed(&d).to_continuous().unwrap().edges()[0];
    let cv = Validator::continuous(&d, EngineCfg::default());
    let dv = Validator::discrete(&d, SameGeneratorRule::Literal);
    let mut seen = HashSet::new();
    for w in loops.windows(2) {
        assert!(w[0].len() <= w[1].len());
    }
    for lp in &loops {
        assert!(lp.len() <= 5);
        assert_eq!(lp.edges()[0], seed);
        assert!(seen.insert(key(lp.discrete_edges())), "duplicate loop");
        let cont = cv.validate_path(lp.edges()).unwrap();
        assert!(cont.is_closed());
        assert!(dv.validate_path(lp.discrete_edges()).unwrap().is_closed());
        assert!(is_noncrossing_path(
            &ContinuousDetector::new(&d, EngineCfg::default()),
            lp.edges()
        ));
        assert!(is_noncrossing_path(&DiscreteDetector::new(&d), lp.discrete_edges()));
    }
}

#[test]
fn stepping_and_querying_agree_and_reset_restarts() {
    let d = Domain::half_turn_square().unwrap();
    let mut a = LoopEnumerator::new(d.clone(), EnumeratorCfg::default());
    let from_query: Vec<_> = a
        .get_loops(usize::MAX, 4)
        .loops
        .iter()
        .map(|l| key(l.discrete_edges()))
        .collect();

    let mut b = LoopEnumerator::new(d, EnumeratorCfg::default());
    let mut lengths = Vec::new();
    while b.explored_length() < 3 {
        let report = b.explore_next_length().unwrap();
        lengths.push(report.length);
        assert_eq!(report.frontier, b.frontier_len());
    }
    assert_eq!(lengths, vec![1, 2, 3]);
    let from_steps: Vec<_> = b.loops().iter().map(|l| key(l.discrete_edges())).collect();
    assert_eq!(from_query, from_steps);

    b.reset();
    assert!(b.loops().is_empty());
    assert_eq!(b.frontier_len(), 1);
    assert_eq!(b.explored_length(), 0);
}

#[test]
fn pruning_keeps_every_loop() {
    let d = square();
    let mut pruned = LoopEnumerator::new(d.clone(), EnumeratorCfg::default());
    let mut full = LoopEnumerator::new(
        d,
        EnumeratorCfg {
            prune: false,
            ..EnumeratorCfg::default()
        },
    );
    let a: Vec<_> = pruned
        .get_loops(usize::MAX, 5)
        .loops
        .iter()
        .map(|l| key(l.discrete_edges()))
        .collect();
    let b: Vec<_> = full
        .get_loops(usize::MAX, 5)
        .loops
        .iter()
        .map(|l| key(l.discrete_edges()))
        .collect();
    assert_eq!(a, b);
    assert!(pruned.frontier_len() <= full.frontier_len());
}

#[test]
fn count_limits_the_answer() {
    let mut en = LoopEnumerator::new(square(), EnumeratorCfg::default());
    let q = en.get_loops(1, 10);
    assert_eq!(q.loops.len(), 1);
    assert!(!q.exhausted);
}

fn seed_path(d: &Domain) -> Path<f64> {
    DiscretePath::seed(d).to_continuous().unwrap()
}

#[test]
fn move_tree_respects_depth_budget() {
    let d = square();
    let path = seed_path(&d);
    let flat = MoveTree::build(&d, &path, 0, TreeCfg::default()).unwrap();
    assert_eq!(flat.len(), 1);
    assert_eq!(
        flat.node(flat.root()).kind,
        NodeKind::Unexpanded { choices: 2 }
    );
    for depth in 1..=3 {
        let tree = MoveTree::build(&d, &path, depth, TreeCfg::default()).unwrap();
        assert_eq!(tree.children(tree.root()).len(), 2);
        for leaf in tree.leaves() {
            assert!(tree.branch_depth(leaf) <= depth);
            assert!(tree.children(leaf).is_empty());
        }
    }
}

#[test]
fn move_tree_closes_and_replays() {
    let d = square();
    let path = seed_path(&d);
    let tree = MoveTree::build(&d, &path, 2, TreeCfg::default()).unwrap();
    assert!(tree.closed_leaves() >= 1);
    let cv = Validator::continuous(&d, EngineCfg::default());
    for leaf in tree.leaves() {
        let mut edges = path.edges().to_vec();
        edges.extend(tree.edges_to(leaf));
        let replay = cv.validate_path(&edges).unwrap();
        let closed = matches!(tree.node(leaf).kind, NodeKind::Closed { .. });
        assert_eq!(replay.is_closed(), closed);
        if let NodeKind::Closed { index } = tree.node(leaf).kind {
            assert_eq!(index, crate::wallpaper::index_of(&d, &replay));
        }
    }
}

#[test]
fn forced_run_cap_and_bad_roots() {
    let d = square();
    let path = seed_path(&d);
    let cfg = TreeCfg {
        max_forced: 0,
        ..TreeCfg::default()
    };
    let tree = MoveTree::build(&d, &path, 3, cfg).unwrap();
    assert!(tree.nodes().iter().all(|n| n.edges.len() <= 1));

    let err = MoveTree::build(&d, &Path::new(), 2, TreeCfg::default()).unwrap_err();
    assert_eq!(err.rule(), Some(RuleViolation::EmptyPath));
}
