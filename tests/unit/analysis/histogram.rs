use super::*;

#[test]
fn last_bin_is_closed_and_outliers_are_dropped() {
    let h = Histogram::uniform(&[0.0, 0.5, 1.0, 1.999, 2.0, 2.5, -0.1], 0.0, 1.0, 2).unwrap();
    assert_eq!(h.counts, vec![2, 3]);
    assert_eq!(h.centers(), vec![0.5, 1.5]);
    assert_eq!(h.max_count(), 3);
    assert_eq!(h.populated_bins(), 2);
}

#[test]
fn bad_edges_are_rejected() {
    assert!(Histogram::new(&[1.0], vec![0.0]).is_err());
    assert!(Histogram::new(&[1.0], vec![0.0, 0.0]).is_err());
    assert!(Histogram::new(&[1.0], vec![0.0, f64::NAN]).is_err());
    assert!(Histogram::uniform(&[1.0], 0.0, 0.0, 3).is_err());
}

#[test]
fn measurement_edges_follow_half_unit_padding() {
    let edges = measurement_edges(150.0, 155.0, 1.0).unwrap();
    assert_eq!(edges.first(), Some(&149.0));
    assert_eq!(edges.last(), Some(&156.0));
    assert_eq!(edges.len(), 8);

    let edges = measurement_edges(150.0, 190.0, 5.0).unwrap();
    assert_eq!(edges, vec![149.0, 154.0, 159.0, 164.0, 169.0, 174.0, 179.0, 184.0, 189.0]);

    assert!(measurement_edges(150.0, 149.0, 1.0).is_err());
}

#[test]
fn summary_matches_hand_computation() {
    let s = SampleSummary::of(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert_eq!(s.count, 8);
    assert_eq!(s.min, 2.0);
    assert_eq!(s.max, 9.0);
    assert_eq!(s.mean, 5.0);
    assert!((s.std - 2.0).abs() < 1e-12);
    assert!(s.skew.unwrap() > 0.0);

    let flat = SampleSummary::of(&[3.0, 3.0, 3.0]).unwrap();
    assert_eq!(flat.skew, Some(0.0));
    assert_eq!(SampleSummary::of(&[1.0, 2.0]).unwrap().skew, None);
    assert!(SampleSummary::of(&[]).is_none());
}

#[test]
fn symmetric_sample_has_zero_skew() {
    let s = SampleSummary::of_ints(&[1, 2, 3, 4, 5]).unwrap();
    assert!(s.skew.unwrap().abs() < 1e-12);
}
