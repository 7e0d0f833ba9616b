use super::*;

#[test]
fn one_panel_per_bin_width() {
    let heights = [160, 165, 170, 170, 171, 175, 180, 190];
    let doc = height_histogram_chart(&heights, &BIN_WIDTHS).unwrap();
    assert_eq!(doc.width(), 2400);
    let svg = doc.finish();
    for title in ["Bin Width: 1 cm", "Bin Width: 2 cm", "Bin Width: 5 cm"] {
        assert!(svg.contains(title), "missing {title}");
    }
    assert_eq!(svg.matches("Height (cm)").count(), 3);
}

#[test]
fn empty_bins_draw_no_bars() {
    let doc = height_histogram_chart(&[170, 170], &[1.0]).unwrap();
    // Background plus one populated bin.
    assert_eq!(doc.finish().matches("<rect").count(), 2);
}

#[test]
fn rejects_empty_input() {
    assert!(height_histogram_chart(&[], &BIN_WIDTHS).is_err());
    assert!(height_histogram_chart(&[170], &[]).is_err());
}
