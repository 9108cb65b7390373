use approx::assert_relative_eq;
use proptest::prelude::*;
use sierpinski::{
    covered_area_ratio, leaves, subdivide, subdivide_par, ErrorKind, Point, Triangle,
};

fn coord() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3f64
}

fn triangle() -> impl Strategy<Value = Triangle> {
    (coord(), coord(), coord(), coord(), coord(), coord())
        .prop_map(|(a, b, c, d, e, f)| Triangle::from_coords((a, b), (c, d), (e, f)))
}

/// Triangles whose area is not vanishingly small relative to their extent.
fn fat_triangle() -> impl Strategy<Value = Triangle> {
    triangle().prop_filter("nearly degenerate", |t| {
        let longest = t.side_lengths().into_iter().fold(0.0f64, f64::max);
        t.area() > 1e-3 * longest * longest
    })
}

fn sorted_sides(t: &Triangle) -> [f64; 3] {
    let mut sides = t.side_lengths();
    sides.sort_by(f64::total_cmp);
    sides
}

proptest! {
    #[test]
    fn leaf_count_is_three_to_the_depth(t in triangle(), depth in 0i64..7) {
        let leaves = subdivide(&t, depth).unwrap();
        prop_assert_eq!(leaves.len(), 3usize.pow(depth as u32));
    }

    #[test]
    fn depth_zero_is_identity(t in triangle()) {
        prop_assert_eq!(subdivide(&t, 0).unwrap(), vec![t]);
    }

    #[test]
    fn recursion_is_concatenation_of_corners(t in triangle(), depth in 1i64..6) {
        let expected: Vec<Triangle> = t
            .corners()
            .iter()
            .flat_map(|c| subdivide(c, depth - 1).unwrap())
            .collect();
        prop_assert_eq!(subdivide(&t, depth).unwrap(), expected);
    }

    #[test]
    fn area_shrinks_by_three_quarters_per_level(t in fat_triangle(), depth in 0i64..7) {
        let total: f64 = subdivide(&t, depth).unwrap().iter().map(Triangle::area).sum();
        let expected = covered_area_ratio(depth as u32) * t.area();
        assert_relative_eq!(total, expected, max_relative = 1e-9);
    }

    #[test]
    fn leaves_are_similar_to_input(t in fat_triangle(), depth in 0i64..5) {
        let scale = 0.5f64.powi(depth as i32);
        let parent = sorted_sides(&t);
        for leaf in subdivide(&t, depth).unwrap() {
            let sides = sorted_sides(&leaf);
            for (child, full) in sides.iter().zip(parent.iter()) {
                assert_relative_eq!(*child, full * scale, max_relative = 1e-9, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn every_entry_point_agrees(t in triangle(), depth in 0i64..8) {
        let collected = subdivide(&t, depth).unwrap();
        let lazy: Vec<Triangle> = leaves(&t, depth).unwrap().collect();
        let parallel = subdivide_par(&t, depth).unwrap();
        prop_assert_eq!(&lazy, &collected);
        prop_assert_eq!(&parallel, &collected);
    }

    #[test]
    fn negative_depth_is_invalid(t in triangle(), depth in i64::MIN..0) {
        let err = subdivide(&t, depth).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn reference_triangle_depth_one() {
    let t = Triangle::from_coords((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
    let leaves = subdivide(&t, 1).unwrap();
    assert_eq!(
        leaves,
        vec![
            Triangle::from_coords((0.0, 0.0), (2.0, 0.0), (0.0, 2.0)),
            Triangle::from_coords((4.0, 0.0), (2.0, 0.0), (2.0, 2.0)),
            Triangle::from_coords((0.0, 4.0), (0.0, 2.0), (2.0, 2.0)),
        ]
    );
}

#[test]
fn reference_triangle_depth_zero() {
    let t = Triangle::from_coords((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
    assert_eq!(subdivide(&t, 0).unwrap(), vec![t]);
}

#[test]
fn window_scene_at_default_depth() {
    // 800x600 window, vertices inset 100px from the edges.
    let t = Triangle::new(
        Point::new(400.0, 100.0),
        Point::new(100.0, 500.0),
        Point::new(700.0, 500.0),
    );
    let leaves = subdivide(&t, 5).unwrap();
    assert_eq!(leaves.len(), 243);

    // The first leaf hugs the apex, the last hugs the bottom-right corner.
    assert_eq!(leaves[0].vertices()[0], Point::new(400.0, 100.0));
    assert_eq!(leaves[242].vertices()[0], Point::new(700.0, 500.0));

    let area: f64 = leaves.iter().map(Triangle::area).sum();
    assert_relative_eq!(area, t.area() * 0.75f64.powi(5), max_relative = 1e-12);
}
