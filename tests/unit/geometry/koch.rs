use super::*;

#[test]
fn triangle_is_equilateral_and_centred() {
    let t = initial_triangle(10.0);
    let d01 = (t[0] - t[1]).hypot();
    let d12 = (t[1] - t[2]).hypot();
    let d20 = (t[2] - t[0]).hypot();
    assert!((d01 - 10.0).abs() < 1e-12);
    assert!((d12 - 10.0).abs() < 1e-12);
    assert!((d20 - 10.0).abs() < 1e-12);

    let cy = (t[0].y + t[1].y + t[2].y) / 3.0;
    assert!(cy.abs() < 1e-12);
}

#[test]
fn point_count_is_three_times_four_to_the_depth() {
    for depth in 0..=5 {
        let pts = koch_points(10.0, depth).unwrap();
        assert_eq!(pts.len(), 3 * 4usize.pow(depth));
    }
}

#[test]
fn first_bump_points_away_from_the_centre() {
    let pts = koch_points(9.0, 1).unwrap();
    let base_y = initial_triangle(9.0)[0].y;
    // Bottom edge bump: its peak sits below the flat base.
    assert!(pts[2].y < base_y);
    assert!((pts[2].x - 0.0).abs() < 1e-12);
    assert!((pts[1].x + 1.5).abs() < 1e-12);
    assert!((pts[3].x - 1.5).abs() < 1e-12);
}

#[test]
fn every_edge_has_the_same_length() {
    let pts = koch_points(27.0, 3).unwrap();
    let outline = closed_outline(&pts);
    assert_eq!(outline.len(), pts.len() + 1);
    for w in outline.windows(2) {
        assert!(((w[1] - w[0]).hypot() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn rejects_bad_input() {
    assert!(koch_points(10.0, MAX_DEPTH + 1).is_err());
    assert!(koch_points(0.0, 1).is_err());
}
