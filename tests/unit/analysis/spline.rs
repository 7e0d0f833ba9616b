use super::*;

#[test]
fn passes_through_every_knot() {
    let xs = vec![0.0, 1.0, 2.5, 3.0, 5.0];
    let ys = vec![1.0, 3.0, -2.0, 0.5, 4.0];
    let s = NaturalCubicSpline::new(xs.clone(), ys.clone()).unwrap();
    for (x, y) in xs.iter().zip(&ys) {
        assert!((s.eval(*x) - y).abs() < 1e-12, "x={x}");
    }
    assert_eq!(s.knots().count(), 5);
}

#[test]
fn reproduces_straight_lines() {
    let xs = vec![0.0, 1.0, 2.0, 4.0];
    let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x - 1.0).collect();
    let s = NaturalCubicSpline::new(xs, ys).unwrap();
    for x in [0.25, 1.5, 3.0, 3.9] {
        assert!((s.eval(x) - (2.0 * x - 1.0)).abs() < 1e-12);
    }
}

#[test]
fn three_knot_peak_matches_closed_form() {
    let s = NaturalCubicSpline::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
    assert!((s.eval(0.5) - 0.6875).abs() < 1e-12);
    assert!((s.eval(1.5) - 0.6875).abs() < 1e-12);
}

#[test]
fn two_knots_interpolate_linearly() {
    let s = NaturalCubicSpline::new(vec![1.0, 3.0], vec![2.0, 6.0]).unwrap();
    assert!((s.eval(2.0) - 4.0).abs() < 1e-12);
}

#[test]
fn invalid_knots_are_rejected() {
    assert!(NaturalCubicSpline::new(vec![0.0], vec![1.0]).is_err());
    assert!(NaturalCubicSpline::new(vec![0.0, 1.0], vec![1.0]).is_err());
    assert!(NaturalCubicSpline::new(vec![0.0, 0.0, 1.0], vec![1.0, 2.0, 3.0]).is_err());
}
