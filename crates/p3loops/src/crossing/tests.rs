//! Crossing predicates on the quarter-turn square (North ≡ East, South ≡ West).

use super::*;
use crate::cfg::EngineCfg;
use crate::domain::{GeneratorId, Side};
use crate::point::Ordinal;

const N: GeneratorId = GeneratorId(0);
const E: GeneratorId = GeneratorId(1);
const S: GeneratorId = GeneratorId(2);
const W: GeneratorId = GeneratorId(3);

fn square() -> Domain {
    Domain::quarter_turn_square().unwrap()
}

/// Edge in percent along each side, as the text notation writes it.
fn pct(a: GeneratorId, pa: f64, b: GeneratorId, pb: f64) -> Edge<f64> {
    Edge::new(Point::boundary(a, pa / 100.0), Point::boundary(b, pb / 100.0))
}

fn ord(a: GeneratorId, ka: usize, b: GeneratorId, kb: usize) -> Edge<Ordinal> {
    Edge::new(
        Point::boundary(a, Ordinal(ka)),
        Point::boundary(b, Ordinal(kb)),
    )
}

#[test]
fn continuous_detects_crossing_chords() {
    let d = square();
    let det = ContinuousDetector::new(&d, EngineCfg::default());
    assert!(det.crosses(&pct(N, 10.0, S, 10.0), &pct(E, 50.0, W, 50.0)));
}

#[test]
fn continuous_separated_and_nested_chords_do_not_cross() {
    let d = square();
    let det = ContinuousDetector::new(&d, EngineCfg::default());
    assert!(!det.crosses(&pct(N, 10.0, N, 30.0), &pct(N, 50.0, N, 70.0)));
    assert!(!det.crosses(&pct(N, 10.0, N, 20.0), &pct(S, 60.0, S, 70.0)));
}

#[test]
fn shared_endpoint_and_grazing_do_not_cross() {
    let d = square();
    let det = ContinuousDetector::new(&d, EngineCfg::default());
    assert!(!det.crosses(&pct(N, 10.0, S, 50.0), &pct(S, 50.0, E, 80.0)));
    // Vertical chord through the centre, and a chord starting exactly at the centre.
    let through = pct(N, 50.0, S, 50.0);
    let grazing = Edge::new(Point::interior(0.5, 0.5), Point::boundary(E, 0.5));
    assert!(!det.crosses(&through, &grazing));
    assert!(!det.crosses(&grazing, &through));
}

#[test]
fn continuous_points_equal_respects_identification_and_eps() {
    let d = square();
    let det = ContinuousDetector::new(&d, EngineCfg::default());
    assert!(det.points_equal(&Point::boundary(N, 0.25), &Point::boundary(E, 0.25)));
    assert!(det.points_equal(
        &Point::boundary(S, 0.75),
        &Point::boundary(W, 0.75 + 1e-12)
    ));
    assert!(!det.points_equal(&Point::boundary(N, 0.3), &Point::boundary(E, 0.4)));
    assert!(!det.points_equal(&Point::boundary(N, 0.3), &Point::boundary(S, 0.3)));
    assert!(!det.points_equal(&Point::boundary(N, 0.3), &Point::interior(0.3, 0.3)));
}

#[test]
fn continuous_check_point_bounds() {
    let d = square();
    let det = ContinuousDetector::new(&d, EngineCfg::default());
    assert!(det.check_point(&Point::boundary(N, 0.0)).is_ok());
    assert!(det.check_point(&Point::boundary(N, 1.0)).is_ok());
    assert!(matches!(
        det.check_point(&Point::boundary(N, 1.01)),
        Err(StructuralError::ParamOutOfRange { .. })
    ));
    assert!(matches!(
        det.check_point(&Point::boundary(GeneratorId(7), 0.5)),
        Err(StructuralError::UnknownGenerator(_))
    ));
    assert!(det.check_point(&Point::interior(1.0, 0.5)).is_err());
}

#[test]
fn discrete_interleaving() {
    let d = square();
    let det = DiscreteDetector::new(&d);
    assert!(det.crosses(&ord(N, 0, S, 0), &ord(E, 1, W, 1)));
    // East runs counterclockwise: east#0 sits after east#1 on the perimeter.
    assert_eq!(det.key(&Point::boundary(E, Ordinal(1))), Some((1, -1)));
    assert!(!det.crosses(&ord(N, 0, N, 1), &ord(N, 2, N, 3)));
    assert!(!det.crosses(&ord(N, 0, S, 0), &ord(S, 0, E, 1)));
    assert!(matches!(
        det.check_point(&Point::interior(0.5, 0.5)),
        Err(StructuralError::InteriorUnsupported)
    ));
}

#[test]
fn identified_generators_read_one_list_in_opposite_directions() {
    let d = square();
    let det = DiscreteDetector::new(&d);
    // north#1 → south#0 leaves the east side on one bank and north#0 on the other.
    let chord = ord(N, 1, S, 0);
    assert!(!det.crosses(&chord, &ord(E, 0, E, 1)));
    assert!(det.crosses(&chord, &ord(N, 0, E, 0)));
}

#[test]
fn batch_helpers_on_the_square() {
    let d = square();
    let det = ContinuousDetector::new(&d, EngineCfg::default());
    let chain = [pct(S, 10.0, E, 30.0), pct(N, 30.0, W, 10.0)];
    assert!(is_chained(&det, &chain));
    assert!(is_noncrossing_path(&det, &chain));

    let broken = [pct(S, 10.0, E, 30.0), pct(N, 50.0, W, 10.0)];
    assert!(!is_chained(&det, &broken));
    assert!(!is_noncrossing_path(&det, &broken));

    let crossing_path = [
        pct(N, 10.0, S, 10.0),
        pct(W, 10.0, E, 50.0),
        pct(E, 50.0, W, 50.0),
    ];
    assert!(is_chained(&det, &crossing_path));
    // The second edge already cuts the first inside the square; south@10 and west@10
    // are one point of the quotient, which does not exempt the pair.
    assert_eq!(first_crossing_pair(&det, &crossing_path), Some((0, 1)));
    assert!(det.crosses(&crossing_path[0], &crossing_path[2]));
    assert!(!is_noncrossing_path(&det, &crossing_path));

    let three = [
        pct(N, 10.0, N, 20.0),
        pct(S, 60.0, S, 80.0),
        pct(E, 30.0, E, 40.0),
    ];
    assert!(is_noncrossing(&det, &three));
    assert!(is_noncrossing(&det, &[]));
}

#[test]
fn subdivided_sides_use_chord_embedding() {
    // Two chords between zones of the north side: collinear on the square, but their
    // endpoints interleave along the perimeter.
    let d = Domain::new(crate::domain::Symmetry::QuarterTurn, 2).unwrap();
    let n0 = d.find(Side::North, 0).unwrap();
    let n1 = d.find(Side::North, 1).unwrap();
    let det = ContinuousDetector::new(&d, EngineCfg::default());
    let a = Edge::new(Point::boundary(n0, 0.2), Point::boundary(n1, 0.5));
    let b = Edge::new(Point::boundary(n0, 0.6), Point::boundary(n1, 0.8));
    assert!(det.crosses(&a, &b));
}
