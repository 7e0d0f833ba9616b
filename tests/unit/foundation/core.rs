use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_secs_to_frames_rounds() {
    let fps = Fps::new(15, 1).unwrap();
    assert_eq!(fps.secs_to_frames_round(1.0), 15);
    assert_eq!(fps.secs_to_frames_round(0.5), 8);
    assert_eq!(fps.secs_to_frames_round(-1.0), 0);
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn hex_colors_parse() {
    assert_eq!(
        Rgba8::from_hex("#E79E16").unwrap(),
        Rgba8::opaque(0xE7, 0x9E, 0x16)
    );
    assert_eq!(Rgba8::from_hex("00000080").unwrap().a, 0x80);
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
    assert_eq!(Rgba8::opaque(0xaf, 0xcb, 0xcf).to_hex(), "#afcbcf");
}

#[test]
fn premul_scales_channels_by_alpha() {
    assert_eq!(
        Rgba8::WHITE.with_alpha(128).to_premul_array(),
        [128, 128, 128, 128]
    );
    assert_eq!(Rgba8::WHITE.to_premul_array(), [255, 255, 255, 255]);
}
