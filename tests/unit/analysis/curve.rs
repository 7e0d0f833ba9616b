use super::*;

fn heights() -> CurveEstimator {
    CurveEstimator::new((145.0, 200.0), 5.0, 200).unwrap()
}

#[test]
fn fewer_than_two_points_gives_flat_zero_curve_of_configured_length() {
    let est = heights();
    for samples in [vec![], vec![172.0]] {
        let curve = est.estimate(&samples).unwrap();
        assert_eq!(curve.len(), 200);
        assert!(curve.iter().all(|p| p.y == 0.0));
    }
}

#[test]
fn single_populated_bin_is_still_flat() {
    let curve = heights().estimate(&[171.0, 172.0, 173.0]).unwrap();
    assert_eq!(curve.len(), 200);
    assert!(curve.iter().all(|p| p.y == 0.0));
}

#[test]
fn curve_spans_domain_and_is_non_negative() {
    let samples = [160.0, 168.0, 171.0, 172.0, 174.0, 176.0, 181.0, 190.0];
    let curve = heights().estimate(&samples).unwrap();
    assert_eq!(curve.len(), 200);
    assert_eq!(curve[0].x, 145.0);
    assert_eq!(curve[199].x, 200.0);
    assert!(curve.iter().all(|p| p.y >= 0.0));
    assert!(curve.iter().any(|p| p.y > 0.0));
}

#[test]
fn curve_hits_bin_counts_at_centres() {
    let est = CurveEstimator::new((0.0, 4.0), 1.0, 9).unwrap();
    let curve = est.estimate(&[0.5, 1.5, 1.6, 2.5, 4.0]).unwrap();
    // Resampled x = 0, 0.5, ..., 4; centres are 0.5, 1.5, 2.5, 3.5.
    assert!((curve[1].y - 1.0).abs() < 1e-12);
    assert!((curve[3].y - 2.0).abs() < 1e-12);
    assert!((curve[5].y - 1.0).abs() < 1e-12);
    assert!((curve[7].y - 1.0).abs() < 1e-12);
    // Outside the outer centres the value is held at the end knot.
    assert_eq!(curve[0].y, curve[1].y);
    assert_eq!(curve[8].y, curve[7].y);
}

#[test]
fn out_of_domain_samples_are_ignored() {
    let est = heights();
    let hist = est.histogram(&[100.0, 150.0, 200.0, 250.0]).unwrap();
    assert_eq!(hist.bin_count(), 11);
    assert_eq!(hist.counts.iter().sum::<usize>(), 2);
    assert_eq!(hist.counts[10], 1);
}

#[test]
fn invalid_configuration_is_rejected() {
    assert!(CurveEstimator::new((1.0, 1.0), 1.0, 10).is_err());
    assert!(CurveEstimator::new((0.0, 1.0), 0.0, 10).is_err());
}

#[test]
fn width_that_does_not_divide_the_domain_still_estimates() {
    // 7 * 0.3 rounds just below 2.1 in floating point.
    let est = CurveEstimator::new((0.0, 2.1), 0.3, 50).unwrap();
    assert_eq!(est.bin_count(), 7);
    let hist = est.histogram(&[0.1, 1.0]).unwrap();
    assert_eq!(hist.edges.len(), 8);
    assert_eq!(*hist.edges.last().unwrap(), 2.1);

    let curve = est.estimate(&[0.1, 1.0]).unwrap();
    assert_eq!(curve.len(), 50);
    assert!(curve.iter().all(|p| p.y >= 0.0));
}

#[test]
fn ragged_last_bin_ends_at_hi() {
    let est = CurveEstimator::new((0.0, 10.0), 3.0, 5).unwrap();
    assert_eq!(est.bin_count(), 4);
    let hist = est.histogram(&[9.5, 10.0]).unwrap();
    assert_eq!(hist.edges, vec![0.0, 3.0, 6.0, 9.0, 10.0]);
    assert_eq!(hist.counts[3], 2);
}
