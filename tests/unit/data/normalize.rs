use super::*;

fn display() -> Bounds {
    Bounds::from_coords(-5.0, -3.0, 5.0, 3.0)
}

#[test]
fn bounds_from_points() {
    assert!(Bounds::from_points(&[]).is_none());
    let b = Bounds::from_points(&[
        Point::new(1.0, -2.0),
        Point::new(-0.5, 4.0),
        Point::new(0.0, 0.0),
    ])
    .unwrap();
    assert_eq!(b, Bounds::from_coords(-0.5, -2.0, 1.0, 4.0));
}

#[test]
fn extremes_map_to_target_boundary() {
    let pts = [
        Point::new(-0.8, 0.1),
        Point::new(1.0, -0.4),
        Point::new(0.2, 0.9),
    ];
    let out = Normalizer::fit(&pts, display()).apply_all(&pts);
    let b = Bounds::from_points(&out).unwrap();
    assert_eq!(b.min.x, -5.0);
    assert_eq!(b.max.x, 5.0);
    assert_eq!(b.min.y, -3.0);
    assert_eq!(b.max.y, 3.0);
}

#[test]
fn renormalizing_normalized_points_is_identity() {
    let pts = [
        Point::new(0.3, 7.0),
        Point::new(-2.0, 1.0),
        Point::new(4.0, -1.5),
    ];
    let once = Normalizer::fit(&pts, display()).apply_all(&pts);
    let twice = Normalizer::fit(&once, display()).apply_all(&once);
    for (a, b) in once.iter().zip(&twice) {
        assert!((a.x - b.x).abs() < 1e-12);
        assert!((a.y - b.y).abs() < 1e-12);
    }
}

#[test]
fn degenerate_axis_falls_back_to_unit_scale() {
    let pts = [Point::new(2.0, 0.0), Point::new(2.0, 1.0)];
    let norm = Normalizer::fit(&pts, display());
    assert_eq!(norm.scale().x, 1.0);
    assert_eq!(norm.scale().y, 6.0);

    let out = norm.apply_all(&pts);
    assert_eq!(out[0], Point::new(-5.0, -3.0));
    assert_eq!(out[1], Point::new(-5.0, 3.0));

    let single = Normalizer::fit(&[Point::new(9.0, 9.0)], display());
    assert_eq!(single.apply(Point::new(9.0, 9.0)), Point::new(-5.0, -3.0));
}

#[test]
fn non_uniform_scaling_per_axis() {
    let norm = Normalizer::new(
        Bounds::from_coords(0.0, 0.0, 1.0, 1.0),
        Bounds::from_coords(0.25, 0.5, 8.25, 8.5),
    );
    assert_eq!(norm.apply(Point::new(0.5, 0.25)), Point::new(4.25, 2.5));
}
