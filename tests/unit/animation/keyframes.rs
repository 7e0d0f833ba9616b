use super::*;

fn ramp(mode: InterpMode) -> Keyframes<f64> {
    Keyframes {
        keys: vec![
            Keyframe {
                frame: FrameIndex(0),
                value: 0.0,
                ease: Ease::Linear,
            },
            Keyframe {
                frame: FrameIndex(10),
                value: 10.0,
                ease: Ease::Linear,
            },
        ],
        mode,
        default: None,
    }
}

#[test]
fn keyframes_hold_is_constant_between_keys() {
    let kf = ramp(InterpMode::Hold);
    assert_eq!(kf.sample(FrameIndex(5)).unwrap(), 0.0);
    assert_eq!(kf.sample(FrameIndex(10)).unwrap(), 10.0);
}

#[test]
fn keyframes_linear_interpolates_and_clamps() {
    let kf = ramp(InterpMode::Linear);
    assert_eq!(kf.sample(FrameIndex(5)).unwrap(), 5.0);
    assert_eq!(kf.sample(FrameIndex(99)).unwrap(), 10.0);
}

#[test]
fn empty_keyframes_use_default_or_fail() {
    let mut kf = Keyframes::<f64> {
        keys: vec![],
        mode: InterpMode::Linear,
        default: Some(0.5),
    };
    assert_eq!(kf.sample(FrameIndex(3)).unwrap(), 0.5);
    kf.default = None;
    assert!(kf.sample(FrameIndex(3)).is_err());
    assert!(kf.validate().is_err());
}

#[test]
fn set_at_jumps_without_disturbing_earlier_frames() {
    let mut kf = Keyframes::constant(1.0);
    kf.set_at(FrameIndex(10), 0.0).unwrap();
    assert_eq!(kf.sample(FrameIndex(9)).unwrap(), 1.0);
    assert_eq!(kf.sample(FrameIndex(10)).unwrap(), 0.0);
    assert_eq!(kf.sample(FrameIndex(50)).unwrap(), 0.0);
    kf.validate().unwrap();
}

#[test]
fn transition_holds_then_moves() {
    let mut kf = Keyframes::constant(0.0);
    kf.transition(FrameIndex(10), FrameIndex(20), 0.0, 1.0, Ease::Linear)
        .unwrap();
    assert_eq!(kf.sample(FrameIndex(5)).unwrap(), 0.0);
    assert_eq!(kf.sample(FrameIndex(15)).unwrap(), 0.5);
    assert_eq!(kf.sample(FrameIndex(20)).unwrap(), 1.0);

    // A later transition starts from wherever the track currently is.
    kf.transition(FrameIndex(30), FrameIndex(40), 1.0, 0.0, Ease::Linear)
        .unwrap();
    assert_eq!(kf.sample(FrameIndex(25)).unwrap(), 1.0);
    assert_eq!(kf.sample(FrameIndex(35)).unwrap(), 0.5);
    kf.validate().unwrap();
}

#[test]
fn vec2_tracks_interpolate_componentwise() {
    let mut kf = Keyframes::constant(Vec2::ZERO);
    kf.transition(
        FrameIndex(0),
        FrameIndex(4),
        Vec2::ZERO,
        Vec2::new(4.0, -8.0),
        Ease::Linear,
    )
    .unwrap();
    assert_eq!(kf.sample(FrameIndex(1)).unwrap(), Vec2::new(1.0, -2.0));
}
