use super::*;
use proptest::prelude::*;

fn square_corners() -> Instance {
    Instance::from_triples(
        [
            (0.0, 0.0, -5.0),
            (10.0, 10.0, 1.0),
            (0.0, 10.0, -3.0),
            (10.0, 0.0, 2.0),
        ],
        2,
    )
}

#[test]
fn perimeter_and_corners_of_full_square() {
    let inst = square_corners();
    let all = [0, 1, 2, 3];
    assert!((bounding_perimeter(inst.buildings(), &all) - 40.0).abs() < 1e-12);
    let c = bounding_corners(inst.buildings(), &all).unwrap();
    assert_eq!(c[0], Point::new(0.0, 0.0));
    assert_eq!(c[1], Point::new(10.0, 0.0));
    assert_eq!(c[2], Point::new(10.0, 10.0));
    assert_eq!(c[3], Point::new(0.0, 10.0));
}

#[test]
fn empty_selection_is_degenerate() {
    let inst = square_corners();
    assert_eq!(bounding_perimeter(inst.buildings(), &[]), 0.0);
    assert!(bounding_corners(inst.buildings(), &[]).is_none());
    assert_eq!(selection_cost(inst.buildings(), &[]), 0.0);
}

#[test]
fn single_point_has_zero_perimeter() {
    let inst = Instance::from_triples([(3.5, -1.0, 7.0)], 1);
    assert_eq!(bounding_perimeter(inst.buildings(), &[0]), 0.0);
    assert!((selection_cost(inst.buildings(), &[0]) - 7.0).abs() < 1e-12);
    let c = bounding_corners(inst.buildings(), &[0]).unwrap();
    assert!(c.iter().all(|p| *p == Point::new(3.5, -1.0)));
}

#[test]
fn collinear_points_have_zero_height() {
    let inst = Instance::from_triples([(0.0, 0.0, 1.0), (3.0, 0.0, 1.0), (7.0, 0.0, 1.0)], 2);
    let b = bounding_box(inst.buildings(), &[0, 1, 2]).unwrap();
    assert_eq!(b.height(), 0.0);
    assert!((b.perimeter() - 14.0).abs() < 1e-12);
}

#[test]
fn selection_cost_adds_costs_to_perimeter() {
    let inst = square_corners();
    // Left edge: perimeter 20, costs -5 + -3.
    assert!((selection_cost(inst.buildings(), &[0, 2]) - 12.0).abs() < 1e-12);
}

#[test]
fn ids_by_cost_is_stable() {
    let inst = Instance::from_triples([(0.0, 0.0, 2.0), (1.0, 0.0, 1.0), (2.0, 0.0, 2.0)], 1);
    assert_eq!(inst.ids_by_cost(), vec![1, 0, 2]);
}

fn triples() -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64, -10.0..10.0f64), 1..40)
}

proptest! {
    #[test]
    fn rectangle_queries_ignore_index_order(pts in triples(), seed in any::<u64>()) {
        use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
        let inst = Instance::from_triples(pts, 1);
        let ids: Vec<usize> = (0..inst.len()).collect();
        let mut shuffled = ids.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
        let b = inst.buildings();
        prop_assert_eq!(bounding_perimeter(b, &ids), bounding_perimeter(b, &shuffled));
        prop_assert_eq!(bounding_corners(b, &ids), bounding_corners(b, &shuffled));
    }

    #[test]
    fn corners_span_the_input_extremes(pts in triples()) {
        let inst = Instance::from_triples(pts, 1);
        let ids: Vec<usize> = (0..inst.len()).collect();
        let c = bounding_corners(inst.buildings(), &ids).unwrap();
        let xs = inst.buildings().iter().map(|b| b.pos.x);
        let ys = inst.buildings().iter().map(|b| b.pos.y);
        let min_x = xs.clone().fold(f64::INFINITY, f64::min);
        let max_x = xs.fold(f64::NEG_INFINITY, f64::max);
        let min_y = ys.clone().fold(f64::INFINITY, f64::min);
        let max_y = ys.fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(c[0], Point::new(min_x, min_y));
        prop_assert_eq!(c[1], Point::new(max_x, min_y));
        prop_assert_eq!(c[2], Point::new(max_x, max_y));
        prop_assert_eq!(c[3], Point::new(min_x, max_y));
        // Axis-aligned: consecutive corners share one coordinate.
        for k in 0..4 {
            let (p, q) = (c[k], c[(k + 1) % 4]);
            prop_assert!(p.x == q.x || p.y == q.y);
        }
    }
}
